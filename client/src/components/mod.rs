//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, episode rows and script sections while
//! reading/writing state owned by the page that mounts them.

pub mod episode_item;
pub mod section_card;
pub mod site_header;
