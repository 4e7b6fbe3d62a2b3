//! The standard 24×25 board, cast and weapons.
//!
//! Layout legend:
//!
//! - `#` wall (outer wall, cellar)
//! - `.` corridor
//! - lowercase letter: interior of the room with that key
//! - uppercase letter: a door into the room with the matching lowercase key

/// Standard board. Row 0 is the top edge; Mrs. White and the Reverend Green
/// start in its two gaps.
pub const CLASSIC_LAYOUT: &str = "
#########.####.#########
kkkkkk#..........#cccccc
kkkkkk..bbbbbbbb..cccccc
kkkkkk..bbbbbbbb..cccccc
kkkkkk..bbbbbbbb..Cccccc
kkkkkk..BbbbbbbB..cccccc
kkkkKk..bbbbbbbb........
#.......bBbbbbBb.......#
#.................iiiiii
dddddddd..........Iiiiii
dddddddd..#####...iiiiii
dddddddd..#####...iiiiii
dddddddD..#####...iiiiIi
dddddddd..#####........#
dddddddd..#####..lllLlll
ddddddDd..#####..lllllll
#.........#####..Lllllll
.................lllllll
#........hhHHhh..lllllll
ooooooO..hhhhhh.........
ooooooo..hhhhhH........#
ooooooo..hhhhhh..Sssssss
ooooooo..hhhhhh..sssssss
ooooooo..hhhhhh..sssssss
ooooooo##hhhhhh#.sssssss
";

/// Suspects: name, text-board glyph and start square (x, y).
pub const CLASSIC_CHARACTERS: [(&str, char, (i32, i32)); 6] = [
    ("Miss Scarlett", 'S', (16, 24)),
    ("Colonel Mustard", 'M', (0, 17)),
    ("Mrs. White", 'W', (9, 0)),
    ("The Reverend Green", 'G', (14, 0)),
    ("Mrs. Peacock", 'P', (23, 6)),
    ("Professor Plum", 'L', (23, 19)),
];

/// Rooms and their layout keys.
pub const CLASSIC_ROOMS: [(&str, char); 9] = [
    ("Kitchen", 'k'),
    ("Ballroom", 'b'),
    ("Conservatory", 'c'),
    ("Billiard Room", 'i'),
    ("Library", 'l'),
    ("Study", 's'),
    ("Hall", 'h'),
    ("Lounge", 'o'),
    ("Dining Room", 'd'),
];

/// Weapons.
pub const CLASSIC_WEAPONS: [&str; 6] = [
    "Candlestick",
    "Dagger",
    "Lead Pipe",
    "Revolver",
    "Rope",
    "Spanner",
];

/// Corner-to-corner secret passages (each works both ways).
pub const CLASSIC_PASSAGES: [(&str, &str); 2] = [("Kitchen", "Study"), ("Conservatory", "Lounge")];
