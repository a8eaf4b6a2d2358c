/// Address the daemon listens on when none is configured.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3003";
