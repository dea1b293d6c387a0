//! Pet body decoding vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_core::model::PetRequest;
use tally_core::{wire, PetFields, Result};

use vector_loader::load;

fn decode(ct: Option<&str>, body: &[u8]) -> Result<PetFields> {
    let req: PetRequest = wire::decode_required(ct, body)?;
    req.into_fields("fido")
}

#[test]
fn pet_vectors() {
    let files = [
        "pet_full.json",
        "pet_defaults.json",
        "pet_missing_category.json",
        "pet_available_string.json",
        "pet_bad_gender.json",
        "pet_bad_birthday.json",
        "pet_name_mismatch.json",
        "pet_unknown_field.json",
        "pet_text_plain.json",
        "pet_no_content_type.json",
        "pet_empty.json",
    ];

    for f in files {
        let v = load(f);
        let res = decode(v.content_type.as_deref(), v.body_bytes());

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.client_code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let fields = res.expect("expected ok body");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(fields.category, ex["category"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(fields.available, ex["available"].as_bool().unwrap(), "vector={}", v.description);
        assert_eq!(
            serde_json::to_value(fields.gender).unwrap(),
            ex["gender"],
            "vector={}",
            v.description
        );
        assert_eq!(
            fields.birthday.to_string(),
            ex["birthday"].as_str().unwrap(),
            "vector={}",
            v.description
        );
    }
}

#[test]
fn birthday_defaults_to_today() {
    let fields = decode(
        Some("application/json"),
        br#"{"category":"fish","available":true}"#,
    )
    .unwrap();
    assert_eq!(fields.birthday, chrono::Utc::now().date_naive());
}
