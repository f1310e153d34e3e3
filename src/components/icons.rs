//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuDownload as Download, LuExternalLink as ExternalLink,
        LuFolder as Folder, LuFunnel as Filter, LuPencil as Edit, LuPlus as Plus,
        LuSearch as Search, LuSettings as Settings, LuTrash2 as Trash, LuUpload as Upload,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronDown as ChevronDown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsDownload as Download,
        BsFolderFill as Folder, BsFunnel as Filter, BsGear as Settings, BsPencil as Edit,
        BsPlusLg as Plus, BsSearch as Search, BsTrash as Trash, BsUpload as Upload,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(SEARCH, Search);
themed_icon!(FILTER, Filter);
themed_icon!(SETTINGS, Settings);
themed_icon!(EDIT, Edit);
themed_icon!(TRASH, Trash);
themed_icon!(PLUS, Plus);
themed_icon!(CLOSE, Close);
themed_icon!(FOLDER, Folder);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(DOWNLOAD, Download);
themed_icon!(UPLOAD, Upload);
