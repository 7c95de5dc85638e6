pub mod mock_host;
pub mod mock_term;
