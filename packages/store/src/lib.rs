pub mod filter;
pub mod lifecycle;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use filter::{accessible_notes, search_notes, SearchQuery};
pub use lifecycle::{Created, LifecycleError, NoteDraft};
pub use models::{Note, NoteFlag, User, UserId, UserSettings, OWNER_ONLY};
pub use repo::{NoteStore, Store, StoreError, UserStore};
