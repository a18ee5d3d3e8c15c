#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Success,
    Danger,
}

/// Stable keys for the translation lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NoticeKey {
    SignatureVerified,
    SignatureInvalid,
}

/// What the user is told after submitting a signed message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub key: NoticeKey,
}

impl Notice {
    pub const VERIFIED: Self = Self {
        severity: Severity::Success,
        key: NoticeKey::SignatureVerified,
    };

    pub const INVALID: Self = Self {
        severity: Severity::Danger,
        key: NoticeKey::SignatureInvalid,
    };

    /// Every failure collapses into the same notice
    #[inline]
    pub const fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::VERIFIED,
            Err(_) => Self::INVALID,
        }
    }
}

/// Receives notices, e.g. a toast queue
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

impl<F> NoticeSink for F
where
    F: FnMut(Notice),
{
    #[inline]
    fn notify(&mut self, notice: Notice) {
        self(notice);
    }
}
