
mod asn1;
mod bigint;
mod bytes;
mod cert;
mod cipher;
mod pem;
mod text;

pub use {
    asn1::{parse_der, Asn1Error, TagClass, Tlv},
    bigint::{BigUint, NegativeResult},
    bytes::Bytes,
    cert::{Certificate, CertificateError},
    cipher::{
        aes,
        aes128_decrypt,
        aes128_encrypt,
        aes192_decrypt,
        aes192_encrypt,
        aes256_decrypt,
        aes256_encrypt,
        des,
        des_decrypt,
        des_encrypt,
        triple_des_decrypt,
        triple_des_encrypt,
        Aes128,
        Aes192,
        Aes256,
        BadPadding,
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        BlockMode,
        Cbc,
        Cipher,
        CipherDecrypt,
        CipherEncrypt,
        CipherError,
        DecryptError,
        Des,
        Ecb,
        NoPadding,
        NotAligned,
        Padding,
        Pkcs7,
        TripleDes,
    },
    pem::{extract_der, pem_to_der, PemError},
    text::{Ciphertext, Key, Plaintext},
};
