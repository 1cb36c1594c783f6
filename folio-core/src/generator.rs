//! Deterministic fake book generator
//!
//! The catalog regenerates its whole window on every page step, so the
//! generator must be a pure function of `(count, language, seed)`. Each call
//! builds a fresh `StdRng` from the seed and the language's salt; no state is
//! carried between calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::book::{BookRecord, Language};
use crate::locale::{locale, LocaleData};

/// Produces a window of book records
pub trait BookGenerator {
    /// Must return exactly `count` records with ids `1..=count`, and the same
    /// records for the same arguments.
    fn generate(&self, count: usize, language: Language, seed: i64) -> Vec<BookRecord>;
}

impl<F> BookGenerator for F
where
    F: Fn(usize, Language, i64) -> Vec<BookRecord>,
{
    fn generate(&self, count: usize, language: Language, seed: i64) -> Vec<BookRecord> {
        self(count, language, seed)
    }
}

/// Generator backed by the built-in locale tables
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeBookGenerator;

impl BookGenerator for FakeBookGenerator {
    fn generate(&self, count: usize, language: Language, seed: i64) -> Vec<BookRecord> {
        let data = locale(language);
        let mut rng = StdRng::seed_from_u64((seed as u64) ^ data.salt);

        (1..=count)
            .map(|id| fake_book(&mut rng, data, id as u32, language, seed))
            .collect()
    }
}

fn fake_book(
    rng: &mut StdRng,
    data: &LocaleData,
    id: u32,
    language: Language,
    seed: i64,
) -> BookRecord {
    let isbn = fake_isbn(rng, data.isbn_group);
    let title = pick(rng, data.titles).to_string();
    let authors = full_name(rng, data);
    let publisher = company_name(rng, data);
    let details = format!("{}\n\n{}", paragraph(rng, data), paragraph(rng, data));
    let img = format!(
        "https://avatars.githubusercontent.com/u/{}",
        rng.random_range(0..100_000_000u32)
    );
    let review = (rng.random_range(0.0..=5.0_f64) * 10.0).round() / 10.0;
    let likes = rng.random_range(0..=10u32);

    BookRecord {
        id,
        isbn,
        title,
        authors,
        publisher,
        details,
        img,
        language,
        review,
        likes,
        seed,
    }
}

fn pick(rng: &mut StdRng, table: &'static [&'static str]) -> &'static str {
    table[rng.random_range(0..table.len())]
}

fn full_name(rng: &mut StdRng, data: &LocaleData) -> String {
    let first = pick(rng, data.first_names);
    let last = pick(rng, data.last_names);
    if data.family_name_first {
        format!("{last}{first}")
    } else {
        format!("{first} {last}")
    }
}

fn company_name(rng: &mut StdRng, data: &LocaleData) -> String {
    let format = pick(rng, data.publisher_formats);
    let a = pick(rng, data.last_names);
    let b = pick(rng, data.last_names);
    format.replace("{a}", a).replace("{b}", b)
}

fn sentence(rng: &mut StdRng, data: &LocaleData) -> String {
    let len = rng.random_range(6..=12);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, data.lorem_words)).collect();
    let mut sentence = capitalize(&words.join(data.word_separator));
    sentence.push_str(data.sentence_end);
    sentence
}

fn paragraph(rng: &mut StdRng, data: &LocaleData) -> String {
    let len = rng.random_range(3..=5);
    let sentences: Vec<String> = (0..len).map(|_| sentence(rng, data)).collect();
    sentences.join(data.word_separator)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// ISBN-13 in the 978 prefix: `978-G-RRR-PPPPP-C`
fn fake_isbn(rng: &mut StdRng, group: u8) -> String {
    let registrant = rng.random_range(0..1_000u32);
    let publication = rng.random_range(0..100_000u32);
    let body = format!("978{group}{registrant:03}{publication:05}");
    let check = isbn13_check_digit(&body);
    format!("978-{group}-{registrant:03}-{publication:05}-{check}")
}

/// Check digit over the first twelve digits of an ISBN-13
fn isbn13_check_digit(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}
