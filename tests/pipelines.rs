use std::io::Write;
use std::path::{Path, PathBuf};

use rsa_dh::dh::exchange;
use rsa_dh::rsa::bigint::{from_u64, to_decimal, to_hex};
use rsa_dh::rsa::{sign_message, verify_signature};
use rsa_dh::util::{load_exchange_config, load_signing_key, read_file};
use rsa_dh::Error;
use tempfile::NamedTempFile;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn write_temp(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[test]
fn test_sign_demo_message() {
    let key = load_signing_key(&demo("sign_params.json")).unwrap();
    let message = read_file(&demo("message.txt")).unwrap();

    let signature = sign_message(&key, &message).unwrap();
    assert_eq!(
        signature.to_hex(),
        "816356df8285a7e3198ac998a70548b77c7f04a7013b3858120286f1ece3e805c4cc0bd4821c59d605d8111d3b9319f9b0bff74e339eb0623e76106c4478462a"
    );

    let verification = verify_signature(key.public_key(), &signature).unwrap();
    assert!(verification.matches);
    assert_eq!(to_hex(&verification.recovered), to_hex(&signature.padded));
}

#[test]
fn test_sign_hex_encoded_params() {
    let params = br#"{
        "n": "0xbaa0bbba958fc17fa04b7712ef3ef58a97ab07c083ecf22389cd38c5921c7e7dcd04eda98503ff334481144098a9dc84cae26757e1531a8775634ce3d104c29d",
        "e": "65537",
        "d": "1693836042179232097532147679955422363565793084640844582772531471877398112366814605366606477311380825768339107849588330657596550365215083400482402633754061"
    }"#;
    let params_file = write_temp(params);
    let key = load_signing_key(params_file.path()).unwrap();
    let reference = load_signing_key(&demo("sign_params.json")).unwrap();
    assert_eq!(key, reference);

    let signature = sign_message(&key, b"hello world").unwrap();
    assert_eq!(
        signature.to_hex(),
        "c6298a9a1f456f3edfacd0c13242ea64692f5830f293849294c398ba03c077dc859ac94a55af0cefa1447f987f8c4733fd4c447f298edc99be9448d9dc113"
    );
}

#[test]
fn test_sign_toy_key_is_rejected() {
    let key = load_signing_key(&demo("toy_sign_params.json")).unwrap();
    let message = read_file(&demo("message.txt")).unwrap();

    match sign_message(&key, &message) {
        Err(Error::ModulusTooSmall {
            modulus_bits,
            required_bits,
        }) => assert!(modulus_bits < required_bits),
        other => panic!("expected ModulusTooSmall, got {:?}", other),
    }
}

#[test]
fn test_missing_params_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_signing_key(&dir.path().join("params.json"));
    assert!(matches!(result, Err(Error::Io { .. })));

    let result = load_exchange_config(&dir.path().join("params.json"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_exchange_demo_params() {
    let config = load_exchange_config(&demo("dh_params.json")).unwrap();
    let outcome = exchange(&config.params, &config.client_private).unwrap();

    assert_eq!(to_decimal(&outcome.client_public), "20");
    assert_eq!(to_decimal(&outcome.shared_secret), "11");
}

#[test]
fn test_exchange_both_sides_agree() {
    let params_file = write_temp(br#"{ "p": "23", "g": "5", "y_s": "19", "x": "6" }"#);
    let config = load_exchange_config(params_file.path()).unwrap();
    let client = exchange(&config.params, &config.client_private).unwrap();

    // Server private scalar behind y_s = 19
    let server_private = from_u64(15);
    let server_secret = config
        .params
        .shared_secret(&client.client_public, &server_private)
        .unwrap();
    assert_eq!(client.shared_secret, server_secret);
}
