//! Static mood → song table
//!
//! Moods are matched case-insensitively. Unknown moods map to an empty list.

use mmr_common::Song;

/// One catalog row, kept as `'static` text until a request needs it
#[derive(Debug, Clone, Copy)]
pub struct CatalogSong {
    pub title: &'static str,
    pub artist: &'static str,
    pub url: &'static str,
}

impl CatalogSong {
    const fn new(title: &'static str, artist: &'static str, url: &'static str) -> Self {
        Self { title, artist, url }
    }

    pub fn to_song(&self) -> Song {
        Song {
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            url: self.url.to_string(),
        }
    }
}

const HAPPY: &[CatalogSong] = &[
    CatalogSong::new("Love Story", "Taylor Swift", "https://youtu.be/8xg3vE8Ie_E?si=ANah2S5dxLuntc8T"),
    CatalogSong::new("Cantik", "Tiara Andini & Arsy Widianto", "https://youtu.be/QMpbUCoW65M?si=312tnWqd8E0_8dFb"),
    CatalogSong::new("Siapkah Kau 'Tuk Jatuh Cinta Lagi", "Hivi!", "https://youtu.be/kX1O93X77d4?si=Da6cSiNYIjsDlmU8"),
    CatalogSong::new("Steal My Girl", "One Direction", "https://youtu.be/UpsKGvPjAgw?si=VumKk_E06oDxAzig"),
    CatalogSong::new("The Lazy Song", "Bruno Mars", "https://youtu.be/fLexgOxsZu0?si=dFDtGr_bTt8FlNhh"),
    CatalogSong::new("Shake It Off", "Taylor Swift", "https://youtu.be/nfWlot6h_JM?si=o5Q2ULus2ELpdfxt"),
];

const SAD: &[CatalogSong] = &[
    CatalogSong::new("Selamat (Selamat Tinggal)", "Virgoun & Audy", "https://youtu.be/ZPxqSAHonSs?si=NTE7iwD-FykGzBAV"),
    CatalogSong::new("Someone Like You", "Adele", "https://youtu.be/hLQl3WQQoQ0?si=jSqfhFvUP8Nchc-v"),
    CatalogSong::new("Happier", "Olivia Rodrigo", "https://www.youtube.com/watch?v=Kz7GzFw310U"),
    CatalogSong::new("We Can't be Friend", "Ariana Grande", "https://youtu.be/KNtJGQkC-WI?si=WHYHp1k5GPgKWNcv"),
    CatalogSong::new("No Body Gets Me", "SZA", "https://youtu.be/tOTr9CCutiE?si=Dovqgl6YgmtC8gqm"),
    CatalogSong::new("Night Changes", "One Direction", "https://youtu.be/syFZfO_wfMQ?si=Tw3Oqk0slnl3Bu9m"),
];

const CHILL: &[CatalogSong] = &[
    CatalogSong::new("Supoerhero", "Lauv", "https://youtu.be/Z2dE90tjU6s?si=aVpEiYPXrcY7nH3e"),
    CatalogSong::new("Weightless", "Marconi Union", "https://youtu.be/UfcAVejslrU?si=OKD58ADg1tdWt-zO"),
    CatalogSong::new("Come Away With Me", "Norah Jones", "https://youtu.be/lbjZPFBD6JU?si=FPBb-C1IKBgQBc_q"),
    CatalogSong::new("Island In The Sun", "Weezer", "https://youtu.be/erG5rgNYSdk?si=ZEf8cicB0L5piPEP"),
    CatalogSong::new("Sunday Morning", "Maroon 5", "https://youtu.be/S2Cti12XBw4?si=osnIeNWTYroyQ5Wi"),
    CatalogSong::new("What A Wonderful World", "Louis Armstrong", "https://youtu.be/rBrd_3VMC3c?si=C7zbanhcOLFkN7Ak"),
];

const ANGRY: &[CatalogSong] = &[
    CatalogSong::new("The Way I Loved You", "Taylor Swift", "https://youtu.be/DlexmDDSDZ0?si=LFKp4b3-QJRA2oVx"),
    CatalogSong::new("No Body, No Crime (feat. HAIM)", "Taylor Swift ft. HAIM", "https://youtu.be/IEPomqor2A8?si=vQTu43Ap-xx0aLVq"),
    CatalogSong::new("Good 4 U", "Olivia Rodrigo", "https://youtu.be/gNi_6U5Pm_o?si=v1-z_ZgZhQwH6-Pr"),
    CatalogSong::new("I hate You", "SZA", "https://youtu.be/O04nsyB8gqA?si=Q-kcke5bfwjfpYrS"),
    CatalogSong::new("Payphone", "Maroon 5 ft. Wiz Khalifa", "https://youtu.be/KRaWnd3LJfs?si=i6IpJpjZV4dNtaxT"),
    CatalogSong::new("That Sould be Me", "Justin Bieber", "https://youtu.be/_pBq1lz1Riw?si=JQhDH9aai4o9APP8"),
];

const ROMANTIC: &[CatalogSong] = &[
    CatalogSong::new("Paper Rings", "Taylor Swift", "https://youtu.be/8zdg-pDF10g?si=HhtjPK2HRgjFnipo"),
    CatalogSong::new("Die With A Smile", "Lady Gaga & Bruno Mars", "https://youtu.be/kPa7bsKwL-c?si=gHIzXgRqFktNtqkG"),
    CatalogSong::new("I Love You 3000", "Stephanie Poetri", "https://youtu.be/cPkE0IbDVs4?si=FeZqQKC4r0Usb3FL"),
    CatalogSong::new("Perfect", "Ed Sheeran", "https://youtu.be/2Vv-BfVoq4g?si=qJrEa5Hqp-WYZNtk"),
    CatalogSong::new("cardigan", "Taylor Swift", "https://youtu.be/K-a8s8OLBSE?si=J7KEKXm2R4U2BmNh"),
    CatalogSong::new("A Thousand Years", "Christina Putri", "https://youtu.be/rtOvBOTyX00?si=lVg1dJMp_20RCWMN"),
];

/// Known moods in display order
const MOODS: &[(&str, &[CatalogSong])] = &[
    ("happy", HAPPY),
    ("sad", SAD),
    ("chill", CHILL),
    ("angry", ANGRY),
    ("romantic", ROMANTIC),
];

/// Songs for `mood`, matched case-insensitively
pub fn songs_for_mood(mood: &str) -> &'static [CatalogSong] {
    let key = mood.to_lowercase();
    MOODS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, songs)| *songs)
        .unwrap_or(&[])
}

/// Names of all known moods
pub fn moods() -> impl Iterator<Item = &'static str> {
    MOODS.iter().map(|(name, _)| *name)
}
