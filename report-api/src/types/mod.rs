pub mod metadata;
pub mod network;
pub mod parsed;
pub mod report;
pub mod transaction;
