use ratatui::style::Color;

// Wheel text at the three emphasis tiers
pub const TEXT_FULL: Color = Color::Rgb(235, 238, 245); // #EBEEF5
pub const TEXT_MID: Color = Color::Rgb(140, 148, 162);  // #8C94A2
pub const TEXT_FAINT: Color = Color::Rgb(82, 88, 100);  // #525864

// Band behind the centered row
pub const SELECTION_BG: Color = Color::Rgb(42, 49, 59); // #2A313B

// Focused column border / highlights
pub const ACCENT: Color = Color::Rgb(161, 193, 129);    // #A1C181
pub const BORDER_DIM: Color = Color::Rgb(70, 76, 86);   // #464C56

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);  // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
