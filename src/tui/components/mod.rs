//! # TUI Components
//!
//! This module contains all views of the chat screen.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Views (Props-Based Rendering)
//!
//! Views that hold nothing but their region and redraw fully from the data
//! passed to `render`:
//! - `TopicView`: Top bar showing the current room's topic
//! - `UserListView`: Sidebar listing the current room's users
//! - `RoomTabsView`: Status bar with the room name and tab numbers
//!
//! ### Stateful Components
//!
//! Components that keep state between frames:
//! - `MessageView`: One region and scroll offset per room
//! - `InputEditor`: The line editor, with cursor, scrolling and history
//!
//! ## Props-Based Data Flow
//!
//! Views receive domain data as `render` parameters, never by reaching into
//! the `App`. The `Screen` decides what each view gets:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! users.render(buf, &current.users, &palette);
//!
//! // Bad: Hidden dependency on global state
//! users.render(buf); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── topic.rs         (Top bar)
//! ├── message_view.rs  (Per-room message panes)
//! ├── user_list.rs     (Sidebar)
//! ├── room_tabs.rs     (Tab bar)
//! └── input_editor/    (Line editor: cursor, history)
//! ```

pub mod input_editor;
pub mod message_view;
mod room_tabs;
mod topic;
mod user_list;

pub use input_editor::{InputEditor, InputEvent};
pub use message_view::{MessageView, MessageWindow};
pub use room_tabs::RoomTabsView;
pub use topic::TopicView;
pub use user_list::UserListView;
