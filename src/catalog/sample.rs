//! Bundled sample catalog.

use crate::model::{ImageRef, Page};

/// Five pages of ten fruit names, one image per page.
///
/// Titles are kept verbatim, including the trailing spaces on
/// `"xigua "` and `"zucchini "`.
pub fn sample_pages() -> Vec<Page> {
    vec![
        Page::new(
            ImageRef::new("image1"),
            [
                "apple",
                "banana",
                "cherry",
                "date",
                "elderberry",
                "quince",
                "raspberry",
                "strawberry",
                "tangerine",
                "ugli fruit",
            ],
        ),
        Page::new(
            ImageRef::new("image2"),
            [
                "fig",
                "grape",
                "honeydew",
                "jackfruit",
                "kiwi",
                "vanilla bean",
                "watermelon",
                "xigua ",
                "yellow passion fruit",
                "zucchini ",
            ],
        ),
        Page::new(
            ImageRef::new("image3"),
            [
                "lemon",
                "mango",
                "nectarine",
                "orange",
                "papaya",
                "blackberry",
                "cantaloupe",
                "dragonfruit",
                "gooseberry",
                "lychee",
            ],
        ),
        Page::new(
            ImageRef::new("image4"),
            [
                "mulberry",
                "olive",
                "peach",
                "plum",
                "pineapple",
                "rambutan",
                "soursop",
                "starfruit",
                "tamarind",
                "boysenberry",
            ],
        ),
        Page::new(
            ImageRef::new("image5"),
            [
                "coconut",
                "cranberry",
                "currant",
                "jabuticaba",
                "kumquat",
                "longan",
                "miracle fruit",
                "persimmon",
                "sapodilla",
                "white currant",
            ],
        ),
    ]
}
