// SPDX-License-Identifier: MPL-2.0
//! Utility-class tokens shared by the page skeletons.
//!
//! Pages are styled with utility classes. Keeping the recurring combinations
//! here means a restyle touches one place, and dark-mode variants always
//! travel with their light counterparts.

/// Page and panel backgrounds.
pub mod surface {
    pub const BODY: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 font-poppins";
    pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-6";
    pub const HEADER: &str = "bg-gradient-to-r from-blue-600 to-purple-600 text-white";
    pub const HERO: &str = "text-center py-16 px-4";
    pub const MODAL_BACKDROP: &str =
        "fixed inset-0 bg-black/50 flex items-center justify-center z-50";
    pub const MODAL_PANEL: &str = "bg-white dark:bg-gray-800 rounded-2xl p-8 max-w-md w-full";
    pub const DROPDOWN: &str =
        "language-dropdown absolute right-0 mt-2 bg-white dark:bg-gray-800 rounded-lg shadow-lg";
}

/// Text colors and sizes.
pub mod text {
    pub const HEADING: &str = "text-4xl md:text-6xl font-bold text-white";
    pub const SECTION_TITLE: &str = "text-3xl font-bold text-gray-900 dark:text-white";
    pub const CARD_TITLE: &str = "text-xl font-semibold text-gray-900 dark:text-white";
    pub const BODY: &str = "text-gray-600 dark:text-gray-400";
    pub const LABEL: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2";
    pub const SMALL: &str = "text-sm text-gray-600 dark:text-gray-400";
    pub const NOTE: &str = "text-xs text-gray-500 dark:text-gray-400 text-center";
    pub const LINK: &str =
        "text-sm text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300";
}

/// Form controls.
pub mod input {
    pub const FIELD: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white";
    pub const CHECKBOX: &str = "text-blue-600 rounded";
}

/// Buttons.
pub mod button {
    pub const PRIMARY: &str = "w-full px-4 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg hover:from-blue-700 hover:to-purple-700 transition-all duration-300 font-medium";
    pub const ROLE: &str = "role-button w-full mt-4 px-4 py-2 rounded-lg bg-blue-600 text-white";
    pub const ICON: &str = "p-2 rounded-lg hover:bg-white/10";
    pub const ROW_ACTION: &str = "p-1 text-gray-500 hover:text-blue-600";
}

/// Table cells.
pub mod table {
    pub const HEAD_CELL: &str = "px-4 py-3 text-left text-xs font-semibold uppercase";
    pub const ROW: &str = "hover:bg-gray-50 dark:hover:bg-gray-700/50";
    pub const CELL: &str = "px-4 py-3";
    pub const NAME_CELL: &str = "px-4 py-3 font-medium text-gray-900 dark:text-white";
    pub const BADGE: &str = "px-2 py-1 rounded-full text-xs font-semibold";
}

/// Icon sizing.
pub mod icon {
    pub const SMALL: &str = "w-4 h-4";
    pub const INLINE: &str = "w-4 h-4 inline mr-2";
    pub const MEDIUM: &str = "w-5 h-5";
}
