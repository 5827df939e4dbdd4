//! Feedback collaborator

/// Fire-and-forget success signal, e.g. a haptic notification on device
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackNotifier {
    fn notify_success(&self);
}

impl<T: FeedbackNotifier + ?Sized> FeedbackNotifier for &T {
    fn notify_success(&self) {
        (**self).notify_success()
    }
}
