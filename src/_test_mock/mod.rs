pub mod session_mock;
