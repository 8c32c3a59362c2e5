mod test_postgres;

pub use scripted_completion_client::{ScriptedCompletionClient, tagged_response};
pub use test_postgres::TestPostgres;
