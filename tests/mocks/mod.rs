pub mod mock_clock;

pub use mock_clock::MockClock;
