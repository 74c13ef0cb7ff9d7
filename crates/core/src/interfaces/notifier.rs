/// User-facing error reporting
pub trait Notifier {
    fn show_error(&self, message: &str);
}
