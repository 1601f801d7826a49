//! Fixed phrase banks and the phrase-selection seam
//!
//! Every randomized slot draws uniformly from a bank of three phrasings.
//! Selection goes through [`IndexPicker`] so tests can inject a
//! deterministic source; reproducibility of the default picker is not a
//! contract, so tests assert set membership rather than exact strings.

use crate::models::Weather;

/// Capability for picking a phrase index in `[0, n)`
pub trait IndexPicker {
    fn pick(&mut self, n: usize) -> usize;
}

/// Default picker backed by the thread-local RNG, uniform and independent
/// across calls
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&mut self, n: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(0..n.max(1))
    }
}

/// Pick one item from a bank
pub fn pick_one<'a, T>(picker: &mut dyn IndexPicker, bank: &'a [T]) -> &'a T {
    let idx = picker.pick(bank.len());
    &bank[idx.min(bank.len() - 1)]
}

// --- Interaction ---

pub const SOLO_BOOSTER: &str =
    "You seem to be enjoying your own company lately — sometimes solo time is the best recharge.";

pub const OTHERS_BOOSTER: &str = "Spending time with other people outside your usual circle \
     seems to lift your spirits. New connections bring fresh energy!";

pub const SOLO_DRAINER: &str =
    "Time alone seems to be bringing your mood down lately. Maybe plan some social activities?";

pub const OTHERS_DRAINER: &str = "Some interactions with people outside your usual circle seem \
     to drain your mood. It's okay to take a break and recharge!";

pub fn booster_phrases(partner: &str) -> [String; 3] {
    [
        format!(
            "Spending time with {} seems to give your mood a boost. Keep those good vibes rolling!",
            partner
        ),
        format!(
            "{} is like your personal happiness WiFi — your mood spikes when you're with them.",
            partner
        ),
        format!(
            "Notice how your mood perks up around {}? That's some connection magic!",
            partner
        ),
    ]
}

pub fn neutral_phrase(partner: &str) -> String {
    format!(
        "Spending time with {} seems to have a neutral effect on your mood. \
         It's neither a big boost nor a drain—just steady company.",
        partner
    )
}

pub fn drainer_phrases(partner: &str) -> [String; 3] {
    [
        format!(
            "Spending time with {} seems to lower your mood. Maybe limit those encounters?",
            partner
        ),
        format!(
            "{} might be unintentionally zapping your happiness. Time for some emotional space!",
            partner
        ),
        format!(
            "Notice your mood dips when you're with {}? Protect your vibe and take care of yourself.",
            partner
        ),
    ]
}

// --- Sleep ---

pub const POOR_SLEEP_ALARM: &str =
    "⚠️ YOU'VE HAD QUITE A FEW POOR SLEEP NIGHTS LATELY! PRIORITIZE REST AND SELF-CARE!!";

pub const DECENT_SLEEP: &str =
    "YOU SEEM TO BE GETTING DECENT SLEEP OVERALL, WHICH HELPS KEEP YOUR MOOD STABLE. NICE JOB!";

pub const SLEEP_NEEDS_WORK: &str =
    "SLEEP QUALITY HAS ROOM FOR IMPROVEMENT. BETTER REST CAN BOOST YOUR MOOD A LOT.";

// --- Recent trend narrative ---

pub const POSITIVE_TREND: [&str; 3] = [
    "You're radiating good vibes lately — keep riding that emotional wave!",
    "You've been emotionally glowing lately. Whatever you're doing, keep at it!",
    "Your recent mood trend looks strong and positive. Love that energy!",
];

pub const TOUGH_PATCH: &str = "Looks like you've been facing a tough patch emotionally recently. \
     It's okay to not be okay — reaching out for support can really help.";

pub const TRENDING_DOWN: &str = "Your mood seems to be trending downward lately. \
     Consider taking small self-care steps to lift your spirits.";

pub const MIDDLE_OF_THE_ROAD: &str = "You're feeling pretty average lately — that's perfectly \
     normal. Keep an eye on your mood and do small things that make you happy.";

// --- Streaks ---

pub const LOW_MOOD_STREAK: &str = "Heads up: your mood's been dipping for a few days. \
     Maybe try a little self-care or chat with a friend?";

// --- Weather ---

pub fn weather_compliments(weather: Weather) -> [&'static str; 3] {
    match weather {
        Weather::Sunny => [
            "Your mood tends to beam on sunny days. Are you secretly photosynthesizing?",
            "Sunny days really light you up! Keep soaking up that energy.",
            "You shine bright when the sun's out. Sun-kissed vibes!",
        ],
        Weather::Cloudy => [
            "You seem to find peace on cloudy days. Cozy vibes = happy vibes!",
            "Cloudy days are your mellow mood moments. Love that chill energy.",
            "Cloud cover doesn't dull your sparkle.",
        ],
        Weather::Rainy => [
            "Rainy days bring out your best. Maybe you're just built different… or waterproof.",
            "You maintain your composure even on rainy days—truly a testament to your emotional resilience.",
            "Rainy weather suits you well, like a warm cup on a cold day.",
        ],
        Weather::Snowy => [
            "You thrive in the snowy stillness. A true winter soul ❄️",
            "Snowy days bring out your calm and cozy side. Beautiful balance!",
            "You're like fresh snow — pure, serene, and uplifting.",
        ],
        Weather::Stormy => [
            "Surprisingly, stormy skies don't dampen your spirit. You're basically unshakable.",
            "Storms might rage outside, but you keep your cool inside.",
            "You handle the storm like a champ — resilient and steady.",
        ],
    }
}

pub fn weather_warnings(weather: Weather) -> [&'static str; 3] {
    match weather {
        Weather::Sunny => [
            "Sunny days seem to drain you a bit. Shades and some quiet time might help. 🕶️",
            "Too much sun can be tiring — remember to take breaks in the shade.",
            "Sunny skies sometimes exhaust your energy. Stay hydrated!",
        ],
        Weather::Cloudy => [
            "Cloudy skies bring a gloom to your mood too. Maybe add a little brightness to your routine?",
            "Cloudy days can feel heavy — try some light therapy or a sunny distraction.",
            "Don't let the gray skies get you down. Bright moments are coming.",
        ],
        Weather::Rainy => [
            "Rainy days tend to bring you down. Time to break out the fuzzy socks and comfort shows!",
            "Rainy weather might sap your energy — cozy up and take it slow.",
            "Stormy moods come with rain. Treat yourself kindly during these days.",
        ],
        Weather::Snowy => [
            "Snowy days are a bit rough for you. Hot drinks and warm thoughts, friend.",
            "Snow chills might be lowering your spirits. Wrap up warm and relax.",
            "Winter's beauty is tough sometimes — take extra care of yourself.",
        ],
        Weather::Stormy => [
            "Stormy days throw you off. Maybe unplug and ride out the chaos with calm.",
            "The storm outside might mirror your mood. Find quiet time to regroup.",
            "When the weather rages, find your inner calm — it helps a lot.",
        ],
    }
}

pub fn weather_moderate(weather: Weather) -> String {
    format!(
        "Your mood on {} days is moderate. Keep observing how weather affects you.",
        weather.label()
    )
}

pub fn sleep_weather_tip(weather: Weather) -> String {
    format!(
        "You tend to sleep best on {} days. Consider syncing your routine to those conditions.",
        weather.as_str().to_uppercase()
    )
}

// --- Volatility ---

pub const LOW_BUT_STABLE: &str = "Your mood has been low but stable. Consider gentle ways to \
     lift your spirits—small steps can make a difference.";

pub const ROLLERCOASTER: &str = "Your mood's been a bit of a rollercoaster lately. \
     Buckle up, and maybe schedule some grounding time.";

pub const STEADY_BALANCE: &str = "Your mood has remained consistently stable recently, \
     demonstrating commendable emotional balance.";
