//! Standard values shared by tests.

/// bcrypt cost used for every hash created in tests (bcrypt's minimum).
pub const TEST_PASSWORD_COST: u32 = 4;

/// Username for tests that need a single logged-in user.
pub static TEST_USERNAME: &str = "tester";

/// Plain-text password for [`TEST_USERNAME`].
pub static TEST_PASSWORD: &str = "correct horse battery";
