#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The text-facing parsers must never panic, whatever the input.
    for token in data.split_whitespace() {
        let (note, rhythm) = chorale_core::rhythm::split_token(token);
        let _ = chorale_core::duration(rhythm);
        let _ = chorale_core::PitchClass::parse(note);
    }

    let notes = chorale_core::parse_melody(data);
    let names: Vec<String> = notes.iter().map(|n| n.note.clone()).collect();
    let _ = chorale_core::harmonize(&names, "C", 1);
});
