//! Encoding model property tests.

use proptest::prelude::*;
use rvref_core::encoding::{self, InstructionFormat};

fn any_format() -> impl Strategy<Value = InstructionFormat> {
    prop::sample::select(InstructionFormat::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn insert_then_extract_round_trips(word in any::<u32>(), format in any_format(), raw in any::<u32>()) {
        for &field in encoding::fields_for(format) {
            let value = raw & field.value_mask();
            let updated = encoding::insert_field(word, field, value).unwrap();
            prop_assert_eq!(encoding::extract_field(updated, field), value);
            prop_assert_eq!(updated & !field.word_mask(), word & !field.word_mask());
        }
    }

    #[test]
    fn fields_reassemble_the_word(word in any::<u32>(), format in any_format()) {
        let rebuilt = encoding::fields_for(format)
            .iter()
            .try_fold(0u32, |acc, &field| {
                encoding::insert_field(acc, field, encoding::extract_field(word, field))
            })
            .unwrap();
        prop_assert_eq!(rebuilt, word);
    }
}
