// ABOUTME: Rendering helpers shared by the dashboard components

pub mod syntax_highlighter;
