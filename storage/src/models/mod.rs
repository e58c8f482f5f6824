mod chat_record;
mod file_analysis_record;
mod user_record;
mod web_search_record;

pub use chat_record::ChatRecord;
pub use file_analysis_record::FileAnalysisRecord;
pub use user_record::UserRecord;
pub use web_search_record::WebSearchRecord;
