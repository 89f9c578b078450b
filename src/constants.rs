// Board dimensions
pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const MIN_BOARD_SIZE: usize = 2;
pub const MAX_BOARD_SIZE: usize = 19;

// Display symbols
pub const EMPTY_SYMBOL: char = '+';
pub const BLACK_SYMBOL: char = '@';
pub const WHITE_SYMBOL: char = 'O';

// Game records
pub const SAVE_DIR_NAME: &str = ".goban";
pub const LAST_GAME_FILE: &str = "last_game.json";
pub const RECORD_FORMAT_VERSION: u32 = 1;
