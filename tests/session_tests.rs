use wordle_narrow::{Outcome, Session, Vocabulary, Word, WordleSolver};

fn get_session() -> Session {
    let answers = ["apple", "angle", "ample"]
        .iter()
        .map(|s| Word::new(s).unwrap())
        .collect();
    Session::new(WordleSolver::new(Vocabulary::new(vec![], answers)))
}

fn run(session: &mut Session, input: &str) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = session.run(input.as_bytes(), &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn test_session_solves_game() {
    // roate against apple is rryrg, which keeps all three answers.
    let mut session = get_session();
    let (outcome, output) = run(&mut session, "rryrg\nggggg\n");

    assert_eq!(outcome, Outcome::Solved(2));
    assert_eq!(
        output,
        "guess: roate\n\
         feedback: possible solutions:\n\
         apple\n\
         angle\n\
         ample\n\
         guess: apple\n\
         feedback: solved in 2 guesses\n"
    );
}

#[test]
fn test_session_reprompts_on_invalid_feedback() {
    let mut session = get_session();
    let (outcome, output) = run(&mut session, "xx\nrrzrg\n\nRRYRG\nggggg\n");

    assert_eq!(outcome, Outcome::Solved(2));
    assert_eq!(output.matches("invalid feedback!").count(), 3);
    assert_eq!(output.matches("guess: roate").count(), 1);
    assert_eq!(session.solver().filter().len(), 1);
}

#[test]
fn test_session_end_of_input() {
    let mut session = get_session();
    let (outcome, output) = run(&mut session, "");

    assert_eq!(outcome, Outcome::EndOfInput);
    assert_eq!(output, "guess: roate\nfeedback: ");
    assert!(session.solver().filter().is_empty());
}

#[test]
fn test_session_contradictory_feedback() {
    // Every answer contains an a and an e.
    let mut session = get_session();
    let (outcome, output) = run(&mut session, "rrrrr\n");

    assert_eq!(outcome, Outcome::NoCandidates);
    assert!(output.ends_with("no possible answers remain\n"));
}

#[test]
fn test_session_opening_win() {
    let mut session = get_session();
    let (outcome, output) = run(&mut session, "ggggg\n");

    assert_eq!(outcome, Outcome::Solved(1));
    assert!(output.ends_with("solved in 1 guesses\n"));
}
