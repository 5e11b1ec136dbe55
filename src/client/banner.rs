use std::time::Duration;
use tokio::time::Instant;

/// How long an error banner stays up
pub const ERROR_TTL: Duration = Duration::from_secs(5);
/// How long a success banner stays up
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// Transient message shown above the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at: Instant::now() + ERROR_TTL,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
            expires_at: Instant::now() + SUCCESS_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Banners currently on screen
#[derive(Debug, Default, Clone)]
pub struct Banners {
    items: Vec<Banner>,
}

impl Banners {
    /// Show `banner`, dropping any that have already expired
    pub fn push(&mut self, banner: Banner) {
        let now = Instant::now();
        self.items.retain(|b| !b.is_expired(now));
        self.items.push(banner);
    }

    /// Banners still visible, dropping expired ones
    pub fn active(&mut self) -> &[Banner] {
        let now = Instant::now();
        self.items.retain(|b| !b.is_expired(now));
        &self.items
    }

    /// Most recent banner, expired or not
    pub fn last(&self) -> Option<&Banner> {
        self.items.last()
    }
}
