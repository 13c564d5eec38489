pub mod crossword;
pub mod map_colouring;
