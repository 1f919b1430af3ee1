pub mod chart_service;
pub mod date_index;
pub mod format_service;
pub mod load_service;
pub mod parser_service;
pub mod table_service;
