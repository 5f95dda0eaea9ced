mod comments;
mod error;
mod issues;
mod meta;
mod scenario;
mod sprints;
