//! Dice-roll narrator.
//!
//! Assembles utterances of the form
//! `intro <count> d <size> segue <r1> joiner <r2> ... <rN> outro`
//! from recorded phrase pools. Categorical slots pick one clip uniformly at
//! random from their pool; numeric slots look up the clip named by the
//! number's English rendering.

use rand::Rng;
use speakophone_spec::{PhraseCategory, RollerConfig};
use tracing::{debug, info, warn};

use crate::buffer::AudioBuffer;
use crate::error::{SpeechError, SpeechResult};
use crate::library::{ClipPool, ClipTable, SampleLibrary};
use crate::numbers::number_to_words;

/// Outcome of one roll, one value per die in roll order.
pub type RollResult = Vec<u32>;

/// Phrases needed to narrate any roll of up to twenty-sided dice.
///
/// Synthesizing each entry into `<phrase>.wav` yields a minimal phrase set.
pub const BASIC_DICE_PHRASES: [&str; 25] = [
    "you rolled",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
    "d",
    "and got",
    "and",
    "have a nice day",
];

/// Rolls `num_dice` dice with `dice_size` sides each.
///
/// # Errors
/// [`SpeechError::InvalidArgument`] if either argument is zero.
pub fn roll_dice<R: Rng + ?Sized>(
    rng: &mut R,
    num_dice: u32,
    dice_size: u32,
) -> SpeechResult<RollResult> {
    validate_roll(num_dice, dice_size)?;
    Ok((0..num_dice).map(|_| rng.gen_range(1..=dice_size)).collect())
}

fn validate_roll(num_dice: u32, dice_size: u32) -> SpeechResult<()> {
    if num_dice < 1 {
        return Err(SpeechError::invalid_arg("num_dice", "must be at least 1"));
    }
    if dice_size < 1 {
        return Err(SpeechError::invalid_arg("dice_size", "must be at least 1"));
    }
    Ok(())
}

/// Text narration of a roll, suitable for the allophone synthesizer.
///
/// ```
/// use speakophone_engine::roller::roll_transcript;
///
/// assert_eq!(
///     roll_transcript(2, 6, &[3, 5]),
///     "you rolled two d six and got three and five that is all"
/// );
/// ```
pub fn roll_transcript(num_dice: u32, dice_size: u32, rolls: &[u32]) -> String {
    let results: Vec<String> = rolls.iter().map(|&r| number_to_words(r)).collect();
    format!(
        "you rolled {} d {} and got {} that is all",
        number_to_words(num_dice),
        number_to_words(dice_size),
        results.join(" and ")
    )
}

/// A narrated roll: the rolled values and the audio that reads them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollNarration {
    /// Rolled values, in narration order.
    pub rolls: RollResult,
    /// Assembled audio.
    pub audio: AudioBuffer,
}

/// Categorical phrase pools, one per non-numeric grammar slot.
///
/// Joiners are only spoken between results, so a phrase set without them
/// can still narrate single-die rolls.
#[derive(Debug, Clone)]
pub struct PhrasePools {
    /// "you rolled"
    pub intro: ClipPool,
    /// "d"
    pub d: ClipPool,
    /// "and got"
    pub segue: ClipPool,
    /// "and"
    pub joining: Option<ClipPool>,
    /// "have a nice day"
    pub outro: ClipPool,
}

impl PhrasePools {
    fn iter(&self) -> impl Iterator<Item = (PhraseCategory, &ClipPool)> {
        [
            (PhraseCategory::Intro, Some(&self.intro)),
            (PhraseCategory::D, Some(&self.d)),
            (PhraseCategory::Segue, Some(&self.segue)),
            (PhraseCategory::Joining, self.joining.as_ref()),
            (PhraseCategory::Outro, Some(&self.outro)),
        ]
        .into_iter()
        .filter_map(|(category, pool)| pool.map(|pool| (category, pool)))
    }
}

/// Assembles narrated dice rolls from phrase pools and number clips.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    numbers: ClipTable,
    pools: PhrasePools,
}

impl DiceRoller {
    /// Creates a narrator from prepared tables.
    ///
    /// # Errors
    /// Returns a config error if the tables disagree on sample rate.
    pub fn new(numbers: ClipTable, pools: PhrasePools) -> SpeechResult<Self> {
        let rate = numbers.sample_rate();
        for (category, pool) in pools.iter() {
            if pool.sample_rate() != rate {
                return Err(SpeechError::config(format!(
                    "{} pool is at {} Hz but number clips are at {} Hz",
                    category,
                    pool.sample_rate(),
                    rate
                )));
            }
        }
        Ok(Self { numbers, pools })
    }

    /// Loads every pool named by `config`.
    ///
    /// Phrases are used as recorded unless `config.conditioning` is set. An
    /// empty joining directory is accepted; every other pool must hold at
    /// least one recording.
    pub fn from_config(config: &RollerConfig) -> SpeechResult<Self> {
        config.validate()?;
        let library = match &config.conditioning {
            Some(params) => SampleLibrary::conditioned(params.clone(), config.sample_rate)?,
            None => SampleLibrary::raw(config.sample_rate),
        };

        let pool = |category| library.load_pool(config.phrase_dir(category));
        let joining = match pool(PhraseCategory::Joining) {
            Ok(joining) => Some(joining),
            Err(SpeechError::EmptyPool { path }) => {
                warn!(
                    directory = %path.display(),
                    "no joining phrases, only single-die rolls can be narrated"
                );
                None
            }
            Err(e) => return Err(e),
        };
        let pools = PhrasePools {
            intro: pool(PhraseCategory::Intro)?,
            d: pool(PhraseCategory::D)?,
            segue: pool(PhraseCategory::Segue)?,
            joining,
            outro: pool(PhraseCategory::Outro)?,
        };
        let numbers = library.load_numbers(config.phrase_dir(PhraseCategory::Number))?;
        info!(
            numbers = numbers.len(),
            directory = %config.sample_directory.display(),
            "loaded dice roller phrases"
        );
        Self::new(numbers, pools)
    }

    /// Number clips keyed by English rendering.
    pub fn numbers(&self) -> &ClipTable {
        &self.numbers
    }

    /// Pool backing a categorical slot; `None` for [`PhraseCategory::Number`].
    pub fn pool(&self, category: PhraseCategory) -> Option<&ClipPool> {
        self.pools
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, pool)| pool)
    }

    /// Output sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.numbers.sample_rate()
    }

    /// Clip for the spoken form of `n`.
    ///
    /// # Errors
    /// [`SpeechError::MissingClip`] if no clip was recorded for that word.
    pub fn number_clip(&self, n: u32) -> SpeechResult<&AudioBuffer> {
        let word = number_to_words(n);
        match self.numbers.get(&word) {
            Some(clip) => Ok(clip),
            None => Err(SpeechError::MissingClip { word }),
        }
    }

    /// Rolls the dice and narrates the result.
    pub fn assemble_roll<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        num_dice: u32,
        dice_size: u32,
    ) -> SpeechResult<AudioBuffer> {
        Ok(self.assemble_roll_with_result(rng, num_dice, dice_size)?.audio)
    }

    /// Like [`DiceRoller::assemble_roll`], also returning the rolled values.
    ///
    /// # Errors
    /// [`SpeechError::InvalidArgument`] for zero dice or sides,
    /// [`SpeechError::MissingClip`] for any number without a recording, and
    /// [`SpeechError::MissingPhrase`] for several dice without joiners.
    pub fn assemble_roll_with_result<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        num_dice: u32,
        dice_size: u32,
    ) -> SpeechResult<RollNarration> {
        let rolls = roll_dice(rng, num_dice, dice_size)?;
        debug!(num_dice, dice_size, ?rolls, "rolled");
        if rolls.len() > 1 && self.pools.joining.is_none() {
            return Err(SpeechError::MissingPhrase {
                category: PhraseCategory::Joining.to_string(),
            });
        }

        let mut parts: Vec<&AudioBuffer> = Vec::with_capacity(2 * rolls.len() + 5);
        parts.push(self.pools.intro.choose(rng));
        parts.push(self.number_clip(num_dice)?);
        parts.push(self.pools.d.choose(rng));
        parts.push(self.number_clip(dice_size)?);
        parts.push(self.pools.segue.choose(rng));
        for (i, &roll) in rolls.iter().enumerate() {
            parts.push(self.number_clip(roll)?);
            if i + 1 < rolls.len() {
                if let Some(joining) = &self.pools.joining {
                    parts.push(joining.choose(rng));
                }
            }
        }
        parts.push(self.pools.outro.choose(rng));

        let audio = AudioBuffer::concat(parts, self.sample_rate());
        debug!(samples = audio.len(), "assembled roll");
        Ok(RollNarration { rolls, audio })
    }
}
