use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const WORDS: [&str; 9] = ["jumps", "laziest", "brown", "a", "quick", "fox", "the", "dog", "over"];

// Rank of a known word is its index.
const WORD_ORDER: [&str; 9] = ["a", "quick", "brown", "fox", "jumps", "over", "the", "laziest", "dog"];

#[derive(Error, Debug, PartialEq, Eq)]
enum WordOrderError {
	#[error("Word not in order table: {0}")]
	UnknownWord(String),
}

// Replaces the best only when strictly greater, so the first of equal maxima wins.
// Iterator::max_by_key keeps the last one.
fn max_by_key<I, K, F>(items: I, mut key: F) -> Option<I::Item>
where
	I: IntoIterator,
	K: Ord,
	F: FnMut(&I::Item) -> K,
{
	items
		.into_iter()
		.map(|item| (key(&item), item))
		.reduce(|best, candidate| if best.0 < candidate.0 { candidate } else { best })
		.map(|(_key, item)| item)
}

fn max_of<I>(items: I) -> Option<I::Item>
where
	I: IntoIterator,
	I::Item: Ord + Clone,
{
	max_by_key(items, |item| item.clone())
}

fn char_count(word: &str) -> i64 {
	word.chars().count() as i64
}

fn last_word_alphabetically<'a>(words: &[&'a str]) -> Option<&'a str> {
	let last = max_of(words.iter().copied());
	debug!(?last, "last word alphabetically");
	last
}

fn longest_word<'a>(words: &[&'a str]) -> Option<&'a str> {
	let longest = max_by_key(words.iter().copied(), |word| char_count(word));
	debug!(?longest, "longest word");
	longest
}

fn shortest_word<'a>(words: &[&'a str]) -> Option<&'a str> {
	// Greatest negated length is the one closest to zero.
	let shortest = max_by_key(words.iter().copied(), |word| -char_count(word));
	debug!(?shortest, "shortest word");
	shortest
}

fn word_ranks() -> HashMap<&'static str, usize> {
	WORD_ORDER
		.iter()
		.copied()
		.enumerate()
		.map(|(rank, word)| (word, rank))
		.collect()
}

fn ordered_words<'a>(words: &[&'a str]) -> Result<Vec<&'a str>, WordOrderError> {
	let ranks = word_ranks();

	let ranked = words
		.iter()
		.copied()
		.map(|word| match ranks.get(word) {
			Some(rank) => Ok((*rank, word)),
			None => {
				warn!(word, "word missing from order table");
				Err(WordOrderError::UnknownWord(word.to_owned()))
			}
		})
		.collect::<Result<Vec<_>, _>>()?;

	let ordered = ranked
		.into_iter()
		.sorted_by_key(|(rank, _word)| *rank)
		.map(|(_rank, word)| word)
		.collect_vec();

	debug!(?ordered, "ordered words");
	Ok(ordered)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct ReverseLexical<'a> {
	word: &'a str,
}

impl<'a> ReverseLexical<'a> {
	fn new(word: &'a str) -> Self {
		Self { word }
	}
}

impl PartialOrd for ReverseLexical<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ReverseLexical<'_> {
	fn cmp(&self, other: &Self) -> Ordering {
		other.word.cmp(self.word)
	}
}

fn first_word_alphabetically<'a>(words: &[&'a str]) -> Option<&'a str> {
	let first = max_by_key(words.iter().copied(), |word| ReverseLexical::new(*word));
	debug!(?first, "first word alphabetically");
	first
}

type Comparator = fn(&str, &str) -> Ordering;

#[derive(Copy, Clone)]
struct ComparatorKey<'a> {
	word: &'a str,
	compare: Comparator,
}

impl PartialEq for ComparatorKey<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for ComparatorKey<'_> {}

impl PartialOrd for ComparatorKey<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ComparatorKey<'_> {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.compare)(self.word, other.word)
	}
}

fn key_from_comparator<'a>(compare: Comparator) -> impl FnMut(&&'a str) -> ComparatorKey<'a> {
	move |word| ComparatorKey {
		word: *word,
		compare,
	}
}

fn reverse_order(lhs: &str, rhs: &str) -> Ordering {
	rhs.cmp(lhs)
}

fn first_word_by_comparator<'a>(words: &[&'a str]) -> Option<&'a str> {
	let first = max_by_key(words.iter().copied(), key_from_comparator(reverse_order));
	debug!(?first, "first word by comparator");
	first
}

// On an equal prefix the longer vector is greater, so "abc" beats "a" here.
fn negated_code_points(word: &str) -> Vec<i64> {
	word.chars().map(|c| -i64::from(u32::from(c))).collect_vec()
}

fn first_word_by_negated_code_points<'a>(words: &[&'a str]) -> Option<&'a str> {
	let first = max_by_key(words.iter().copied(), |word| negated_code_points(word));
	debug!(?first, "first word by negated code points");
	first
}

fn check_ordered_words(words: &[&str]) -> Result<(), WordOrderError> {
	assert_eq!(
		ordered_words(words)?,
		["a", "quick", "brown", "fox", "jumps", "over", "the", "laziest", "dog"]
	);
	println!("get_ordered_words PASSED!");
	Ok(())
}

fn main() -> Result<(), WordOrderError> {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "word_extrema=warn".into()))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	assert_eq!(last_word_alphabetically(&WORDS), Some("the"));
	println!("get_last_word_alphabetically PASSED!");
	assert_eq!(longest_word(&WORDS), Some("laziest"));
	println!("get_longest_word PASSED!");
	assert_eq!(shortest_word(&WORDS), Some("a"));
	println!("get_shortest_word PASSED!");

	check_ordered_words(&WORDS)?;

	assert_eq!(first_word_alphabetically(&WORDS), Some("a"));
	// No word in WORDS is a prefix of another, so the other reverse keys agree.
	assert_eq!(first_word_by_comparator(&WORDS), Some("a"));
	assert_eq!(first_word_by_negated_code_points(&WORDS), Some("a"));
	println!("get_first_word_alphabetically PASSED!");

	println!("All tests PASSED!");
	Ok(())
}
