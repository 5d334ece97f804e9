pub(crate) mod health_check;
pub(crate) mod layout_guard;
pub(crate) mod screen_warning;
pub(crate) mod shell;
