//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and data views while reading shared
//! state from Leptos context providers. Presentation primitives
//! (`brand_logo`, `page_header`, `search_input`) take everything they show as
//! props and hold no logic beyond conditional rendering.

pub mod audit_log_table;
pub mod brand_logo;
pub mod entity_menu;
pub mod entity_provider;
pub mod page_header;
pub mod search_input;
pub mod toast_stack;
pub mod top_bar;
