//! Shared class fragments used across page components.

pub const CARD: &str = "card w-[400px] max-w-[90%] bg-base-200 shadow-sm";
pub const TOOLBAR: &str = "flex items-center justify-between gap-4";
pub const GRID_WRAPPER: &str = "overflow-x-auto rounded-lg border border-base-300";
pub const EMPTY_STATE: &str = "py-12 text-center opacity-60";
pub const FIELD: &str = "flex flex-col gap-1";
pub const JSON_BLOCK: &str =
    "max-h-[50vh] overflow-auto whitespace-pre-wrap break-words rounded-md border border-base-300 bg-base-200 p-3 text-xs";
