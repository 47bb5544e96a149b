mod properties;

use crate::dict::MorphemeDictionary;

/// Small English-flavoured dictionary shared by the property tests.
pub(super) fn make_test_dict() -> MorphemeDictionary {
    MorphemeDictionary::parse(
        "\
un-: meaning=not
re-: meaning=again
pre-: meaning=before
over-: meaning=excess
-ed: tense=past
-ing: aspect=prog
-s: number=plur
-er: degree=comp
-est: degree=sup
-ness: meaning=state
heat: meaning=warm
cook: meaning=cook
load: meaning=burden
",
    )
}
