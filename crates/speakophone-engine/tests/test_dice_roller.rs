//! Dice-roll narration from phrase directories on disk.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::write_clip;
use speakophone_engine::rng::{create_rng, create_roll_rng};
use speakophone_engine::{number_to_words, DiceRoller, SpeechError};
use speakophone_spec::{PhraseCategory, RollerConfig};

const RATE: u32 = 22_050;

fn write_phrases(root: &Path) -> PathBuf {
    let base = root.join("roboid");
    write_clip(&base.join("1_Intros/you rolled.wav"), &[101; 10], RATE);
    write_clip(&base.join("1_Intros/lets see.wav"), &[102; 12], RATE);
    for n in 1..=20u32 {
        let word = number_to_words(n);
        write_clip(
            &base.join("2_Numbers").join(format!("{word}.wav")),
            &vec![n as i16; n as usize],
            RATE,
        );
    }
    write_clip(&base.join("3_Dees/d.wav"), &[301; 3], RATE);
    write_clip(&base.join("4_Segues/and got.wav"), &[401; 6], RATE);
    write_clip(&base.join("5_Joiners/and.wav"), &[501; 4], RATE);
    write_clip(&base.join("6_Outros/have a nice day.wav"), &[601; 9], RATE);
    write_clip(&base.join("6_Outros/that is all.wav"), &[602; 7], RATE);
    fs::write(base.join("6_Outros/README"), "not a clip").unwrap();

    let config = format!(
        r#"{{
            "sample_directory": "roboid",
            "intro_phrases": "1_Intros",
            "number_phrases": "2_Numbers",
            "d_phrases": "3_Dees",
            "segue_phrases": "4_Segues",
            "joining_phrases": "5_Joiners",
            "outro_phrases": "6_Outros",
            "sample_rate": {RATE}
        }}"#
    );
    let path = root.join("dice_roller_phrases.json");
    fs::write(&path, config).unwrap();
    path
}

fn load_roller(root: &Path) -> DiceRoller {
    let config = RollerConfig::load(write_phrases(root)).unwrap();
    DiceRoller::from_config(&config).unwrap()
}

#[test]
fn test_loads_every_pool() {
    let dir = tempfile::tempdir().unwrap();
    let roller = load_roller(dir.path());

    assert_eq!(roller.numbers().len(), 20);
    assert!(roller.numbers().contains("seventeen"));
    assert_eq!(roller.pool(PhraseCategory::Intro).unwrap().len(), 2);
    assert_eq!(
        roller.pool(PhraseCategory::Outro).unwrap().names(),
        vec!["have a nice day", "that is all"]
    );
}

#[test]
fn test_two_d_twenty() {
    let dir = tempfile::tempdir().unwrap();
    let roller = load_roller(dir.path());

    let narration = roller
        .assemble_roll_with_result(&mut create_rng(2020), 2, 20)
        .unwrap();
    assert_eq!(narration.rolls.len(), 2);
    assert!(narration.rolls.iter().all(|&r| (1..=20).contains(&r)));

    let numbers: usize = narration.rolls.iter().map(|&r| r as usize).sum();
    let fixed = 3 + 20 + 6 + 2 + 4;
    let audio = &narration.audio;
    assert_eq!(audio.sample_rate(), RATE);
    let variable = audio.len() - fixed - numbers;
    assert!([10 + 9, 10 + 7, 12 + 9, 12 + 7].contains(&variable));
}

#[test]
fn test_roll_is_reproducible_per_seed() {
    let dir = tempfile::tempdir().unwrap();
    let roller = load_roller(dir.path());

    let first = roller.assemble_roll(&mut create_roll_rng(7, 0), 3, 6).unwrap();
    let again = roller.assemble_roll(&mut create_roll_rng(7, 0), 3, 6).unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_request_errors_leave_roller_usable() {
    let dir = tempfile::tempdir().unwrap();
    let roller = load_roller(dir.path());
    let mut rng = create_rng(1);

    assert!(matches!(
        roller.assemble_roll(&mut rng, 0, 6),
        Err(SpeechError::InvalidArgument { .. })
    ));
    match roller.assemble_roll(&mut rng, 1, 21) {
        Err(SpeechError::MissingClip { word }) => assert_eq!(word, "twenty one"),
        other => panic!("expected missing clip, got {other:?}"),
    }
    assert!(roller.assemble_roll(&mut rng, 1, 6).is_ok());
}

#[test]
fn test_empty_pool_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_phrases(dir.path());
    let outros = dir.path().join("roboid/6_Outros");
    fs::remove_file(outros.join("have a nice day.wav")).unwrap();
    fs::remove_file(outros.join("that is all.wav")).unwrap();

    let config = RollerConfig::load(path).unwrap();
    match DiceRoller::from_config(&config) {
        Err(SpeechError::EmptyPool { path }) => assert_eq!(path, outros),
        other => panic!("expected empty pool, got {other:?}"),
    }
}

#[test]
fn test_missing_joiners_fail_at_roll_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_phrases(dir.path());
    fs::remove_file(dir.path().join("roboid/5_Joiners/and.wav")).unwrap();

    let config = RollerConfig::load(path).unwrap();
    let roller = DiceRoller::from_config(&config).unwrap();
    assert!(roller.pool(PhraseCategory::Joining).is_none());

    let mut rng = create_rng(4);
    assert!(roller.assemble_roll(&mut rng, 1, 20).is_ok());
    match roller.assemble_roll(&mut rng, 2, 20) {
        Err(SpeechError::MissingPhrase { category }) => assert_eq!(category, "joining"),
        other => panic!("expected missing phrase, got {other:?}"),
    }
}
