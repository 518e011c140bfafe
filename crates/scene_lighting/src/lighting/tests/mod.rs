//! Cross-module lighting tests
