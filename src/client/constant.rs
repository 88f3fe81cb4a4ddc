pub const SITE_NAME: &str = "Embedboard";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;
