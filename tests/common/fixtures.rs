//! Static note collections used across harnesses.

use hoverdict_core::Record;
use hoverdict_store::MemoryStore;

use super::builders::{store_of, NoteBuilder};

/// Current deck of [`spanish_notes`].
pub const SPANISH: &str = "Spanish";

/// A small Spanish vocabulary collection.
///
/// | id | deck       | matches "gato" |
/// |----|------------|----------------|
/// | 2  | Spanish    | yes            |
/// | 3  | French     | yes (other deck) |
/// | 5  | Spanish    | yes (inside a cloze) |
/// | 7  | Spanish    | no             |
/// | 9  | Spanish    | yes (Back only) |
/// | 11 | Dictionary | yes (other deck) |
/// | 12 | Dictionary | no             |
pub fn spanish_notes() -> Vec<Record> {
    vec![
        NoteBuilder::new(5)
            .deck(SPANISH)
            .note_type("Cloze")
            .field("Text", "El {{c1::gato::animal}} duerme")
            .field("Extra", "the cat sleeps")
            .field("Source", "Book 1")
            .build(),
        NoteBuilder::new(2)
            .deck(SPANISH)
            .field("Front", "gato")
            .field("Back", "cat")
            .field("Source", "Book 1")
            .build(),
        NoteBuilder::new(9)
            .deck(SPANISH)
            .field("Front", "gatito")
            .field("Back", "kitten (small gato)")
            .field("Source", "Book 2")
            .build(),
        NoteBuilder::new(7)
            .deck(SPANISH)
            .field("Front", "perro")
            .field("Back", "dog")
            .field("Source", "Book 1")
            .build(),
        NoteBuilder::new(3)
            .deck("French")
            .field("Front", "chat")
            .field("Back", "cat (not gato)")
            .build(),
        NoteBuilder::new(11)
            .deck("Dictionary")
            .note_type("Mouseover Dictionary")
            .field("Term", "gato")
            .field("Definition", "cat; <i>m.</i>")
            .build(),
        NoteBuilder::new(12)
            .deck("Dictionary")
            .note_type("Mouseover Dictionary")
            .field("Term", "perro")
            .field("Definition", "dog")
            .build(),
    ]
}

pub fn spanish_store() -> MemoryStore {
    store_of(SPANISH, spanish_notes())
}

/// The same collection as a JSON collection file body.
pub const SPANISH_JSON: &str = r#"{
  "current_deck": "Spanish",
  "notes": [
    { "id": 2, "deck": "Spanish", "note_type": "Basic",
      "fields": [ { "name": "Front", "content": "gato" },
                  { "name": "Back", "content": "cat" },
                  { "name": "Source", "content": "Book 1" } ] },
    { "id": 5, "deck": "Spanish", "note_type": "Cloze",
      "fields": [ { "name": "Text", "content": "El {{c1::gato::animal}} duerme" },
                  { "name": "Extra", "content": "the cat sleeps" },
                  { "name": "Source", "content": "Book 1" } ] },
    { "id": 9, "deck": "Spanish", "note_type": "Basic",
      "fields": [ { "name": "Front", "content": "gatito" },
                  { "name": "Back", "content": "kitten (small gato)" },
                  { "name": "Source", "content": "Book 2" } ] },
    { "id": 11, "deck": "Dictionary", "note_type": "Mouseover Dictionary",
      "fields": [ { "name": "Term", "content": "gato" },
                  { "name": "Definition", "content": "cat; <i>m.</i>" } ] }
  ]
}"#;

/// Write [`SPANISH_JSON`] into `dir` and return the path.
pub fn write_spanish_collection(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("collection.json");
    std::fs::write(&path, SPANISH_JSON).expect("write fixture collection");
    path
}
