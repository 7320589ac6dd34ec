use std::collections::HashMap;
use wordle_narrow::{
    CandidateFilter, FeedbackCode, GuessFeedback, GuessSelector, Vocabulary, Word, OPENING_GUESS,
};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| Word::new(s).unwrap()).collect()
}

fn w(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn get_test_words() -> Vec<Word> {
    words(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

/// A constraint that rules out none of the test words.
fn keep_everything() -> GuessFeedback {
    GuessFeedback::observe(&w("fuzzy"), &w("crane"))
}

#[test]
fn test_opening_guess_with_no_feedback() {
    let vocabulary = Vocabulary::new(vec![], get_test_words());
    let selector = GuessSelector::new(vocabulary.guesses(), vocabulary.answers());
    let mut filter = CandidateFilter::new();

    let first = selector.select(&mut filter).unwrap();
    assert_eq!(first.word.as_str(), OPENING_GUESS);
    assert_eq!(first.cost, None);
    assert_eq!(first.remaining, 10);
    assert!(!first.is_possible_answer);

    let again = selector.select(&mut filter).unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_opening_guess_ignores_vocabulary() {
    let tiny = words(&["apple"]);
    let selector = GuessSelector::new(&tiny, &tiny);
    let opening = selector.select(&mut CandidateFilter::new()).unwrap();
    assert_eq!(opening.word, w("roate"));
}

#[test]
fn test_single_remaining_answer() {
    let vocabulary = Vocabulary::new(vec![], words(&["apple", "angle", "ample"]));
    let selector = GuessSelector::new(vocabulary.guesses(), vocabulary.answers());
    let mut filter = CandidateFilter::new();

    assert_eq!(selector.select(&mut filter).unwrap().word, w("roate"));
    assert_eq!(selector.select(&mut filter).unwrap().word, w("roate"));

    filter.push(GuessFeedback::observe(&w("ample"), &w("apple")));
    assert!(filter.is_possible(&w("apple")));
    assert!(!filter.is_possible(&w("angle")));
    assert!(!filter.is_possible(&w("ample")));

    let best = selector.select(&mut filter).unwrap();
    assert_eq!(best.word, w("apple"));
    assert_eq!(best.cost, None);
    assert_eq!(best.remaining, 1);
    assert!(best.is_possible_answer);
}

#[test]
fn test_two_remaining_answers() {
    let vocabulary = Vocabulary::new(
        words(&["zebra"]),
        words(&["apple", "angle", "fuzzy", "jazzy"]),
    );
    let selector = GuessSelector::new(vocabulary.guesses(), vocabulary.answers());
    let mut filter = CandidateFilter::new();
    filter.push(GuessFeedback::observe(&w("zzzzz"), &w("apple")));

    let best = selector.select(&mut filter).unwrap();
    assert_eq!(best.word, w("apple"));
    assert_eq!(best.remaining, 2);
    assert_eq!(best.cost, None);
}

#[test]
fn test_no_remaining_answers() {
    let answers = get_test_words();
    let selector = GuessSelector::new(&answers, &answers);
    let mut filter = CandidateFilter::new();
    filter.push(GuessFeedback::new(w("zzzzz"), FeedbackCode::MAX));

    assert!(selector.select(&mut filter).is_none());
    assert!(selector.rank(&mut filter, 5).is_empty());
}

#[test]
fn test_strictly_cheaper_guess_replaces_earlier_one() {
    // zzzzz is scanned first but splits nothing: one class of three, cost 9.
    let vocabulary = Vocabulary::new(words(&["zzzzz"]), words(&["apple", "angle", "ample"]));
    let selector = GuessSelector::new(vocabulary.guesses(), vocabulary.answers());
    let mut filter = CandidateFilter::new();
    filter.push(GuessFeedback::observe(&w("roate"), &w("apple")));

    let best = selector.select(&mut filter).unwrap();
    assert_eq!(best.word, w("apple"));
    assert_eq!(best.cost, Some(3));
    assert_eq!(best.remaining, 3);
}

#[test]
fn test_ties_keep_first_scanned_guess() {
    // ample and apple both separate all three answers; ample comes first.
    let vocabulary = Vocabulary::new(words(&["ample"]), words(&["apple", "angle", "ample"]));
    let selector = GuessSelector::new(vocabulary.guesses(), vocabulary.answers());
    let mut filter = CandidateFilter::new();
    filter.push(GuessFeedback::observe(&w("roate"), &w("apple")));

    let best = selector.select(&mut filter).unwrap();
    assert_eq!(best.word, w("ample"));
    assert_eq!(best.cost, Some(3));
}

#[test]
fn test_score_sums_squared_partition_sizes() {
    let answers = get_test_words();
    let selector = GuessSelector::new(&answers, &answers);
    let mut filter = CandidateFilter::new();
    filter.push(keep_everything());
    let remaining: Vec<Word> = filter.possible(&answers).copied().collect();
    assert_eq!(remaining.len(), 10);

    for guess in words(&["crane", "toast", "zzzzz", "eerie"]) {
        let mut sizes: HashMap<FeedbackCode, u64> = HashMap::new();
        for solution in &remaining {
            *sizes.entry(FeedbackCode::compute(&guess, solution)).or_default() += 1;
        }
        let expected: u64 = sizes.values().map(|n| n * n).sum();

        assert_eq!(selector.score(&guess, &mut filter, &remaining), expected, "{guess}");
    }
    assert_eq!(filter.constraints(), &[keep_everything()]);
}

#[test]
fn test_select_matches_cheapest_score() {
    let answers = get_test_words();
    let guesses = Vocabulary::new(words(&["zzzzz", "fjord", "eerie"]), answers.clone());
    let selector = GuessSelector::new(guesses.guesses(), guesses.answers());
    let mut filter = CandidateFilter::new();
    filter.push(keep_everything());
    let remaining: Vec<Word> = filter.possible(&answers).copied().collect();

    let costs: Vec<u64> = guesses
        .guesses()
        .iter()
        .map(|g| selector.score(g, &mut filter, &remaining))
        .collect();
    let least = *costs.iter().min().unwrap();
    let first = costs.iter().position(|&c| c == least).unwrap();

    let best = selector.select(&mut filter).unwrap();
    assert_eq!(best.word, guesses.guesses()[first]);
    assert_eq!(best.cost, Some(least));
    assert_eq!(filter.constraints(), &[keep_everything()]);
}

#[test]
fn test_rank_orders_by_cost() {
    let vocabulary = Vocabulary::new(words(&["zzzzz"]), words(&["apple", "angle", "ample"]));
    let selector = GuessSelector::new(vocabulary.guesses(), vocabulary.answers());
    let mut filter = CandidateFilter::new();
    filter.push(GuessFeedback::observe(&w("roate"), &w("apple")));

    let ranked = selector.rank(&mut filter, 10);
    let order: Vec<(&str, Option<u64>)> = ranked.iter().map(|a| (a.word.as_str(), a.cost)).collect();
    assert_eq!(
        order,
        [
            ("apple", Some(3)),
            ("ample", Some(3)),
            ("angle", Some(5)),
            ("zzzzz", Some(9)),
        ]
    );
    assert!(!ranked[3].is_possible_answer);

    let top = selector.rank(&mut filter, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].word, selector.select(&mut filter).unwrap().word);
}
