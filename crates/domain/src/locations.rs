// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static table of Indonesian provinces and their cities.
//!
//! ## Invariants
//!
//! - Every city name is unique across the whole table, so a city name alone
//!   identifies a location for the by-city schedule query.
//! - Every province carries the IANA zone its local prayer times are
//!   expressed in (WIB, WITA or WIT).
//! - The table is compiled in; it never changes at runtime.

use crate::error::DomainError;
use crate::types::Coordinates;
use chrono_tz::Tz;

/// Western Indonesia Time (UTC+7).
const WIB: Tz = chrono_tz::Asia::Jakarta;
/// Central Indonesia Time (UTC+8).
const WITA: Tz = chrono_tz::Asia::Makassar;
/// Eastern Indonesia Time (UTC+9).
const WIT: Tz = chrono_tz::Asia::Jayapura;

/// Province used when a user has never saved a location.
pub const DEFAULT_PROVINCE: &str = "DKI Jakarta";
/// City used when a user has never saved a location.
pub const DEFAULT_CITY: &str = "Jakarta Pusat";

/// A city with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// A province, its time zone, and the cities the display supports in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Province {
    pub name: &'static str,
    pub timezone: Tz,
    pub cities: &'static [City],
}

/// A resolved (province, city) pair from the location table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub province: &'static Province,
    pub city: &'static City,
}

impl Location {
    #[must_use]
    pub const fn province_name(&self) -> &'static str {
        self.province.name
    }

    #[must_use]
    pub const fn city_name(&self) -> &'static str {
        self.city.name
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.province.timezone
    }

    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.city.coordinates()
    }
}

macro_rules! cities {
    ($($name:literal => ($lat:expr, $lon:expr)),+ $(,)?) => {
        &[$(City { name: $name, latitude: $lat, longitude: $lon }),+]
    };
}

static PROVINCES: &[Province] = &[
    Province {
        name: "Aceh",
        timezone: WIB,
        cities: cities! {
            "Banda Aceh" => (5.5483, 95.3238),
            "Lhokseumawe" => (5.1801, 97.1507),
            "Langsa" => (4.4683, 97.9683),
            "Sabang" => (5.8933, 95.3214),
            "Meulaboh" => (4.1363, 96.1285),
        },
    },
    Province {
        name: "Sumatera Utara",
        timezone: WIB,
        cities: cities! {
            "Medan" => (3.5952, 98.6722),
            "Binjai" => (3.6001, 98.4854),
            "Pematangsiantar" => (2.9595, 99.0687),
            "Sibolga" => (1.7427, 98.7792),
            "Tebing Tinggi" => (3.3285, 99.1625),
            "Padang Sidempuan" => (1.3797, 99.2734),
            "Gunungsitoli" => (1.2888, 97.6143),
        },
    },
    Province {
        name: "Sumatera Barat",
        timezone: WIB,
        cities: cities! {
            "Padang" => (-0.9471, 100.4172),
            "Bukittinggi" => (-0.3056, 100.3692),
            "Payakumbuh" => (-0.2209, 100.6308),
            "Solok" => (-0.7997, 100.6544),
            "Pariaman" => (-0.6264, 100.1206),
            "Sawahlunto" => (-0.6825, 100.7778),
        },
    },
    Province {
        name: "Riau",
        timezone: WIB,
        cities: cities! {
            "Pekanbaru" => (0.5071, 101.4478),
            "Dumai" => (1.6655, 101.4470),
            "Bengkalis" => (1.4669, 102.1073),
            "Rengat" => (-0.3764, 102.5475),
        },
    },
    Province {
        name: "Kepulauan Riau",
        timezone: WIB,
        cities: cities! {
            "Tanjung Pinang" => (0.9186, 104.4554),
            "Batam" => (1.0456, 104.0305),
            "Tanjung Balai Karimun" => (1.0000, 103.4333),
        },
    },
    Province {
        name: "Jambi",
        timezone: WIB,
        cities: cities! {
            "Jambi" => (-1.6101, 103.6131),
            "Sungai Penuh" => (-2.0631, 101.3915),
            "Muara Bungo" => (-1.4833, 102.1167),
        },
    },
    Province {
        name: "Sumatera Selatan",
        timezone: WIB,
        cities: cities! {
            "Palembang" => (-2.9761, 104.7754),
            "Lubuklinggau" => (-3.2967, 102.8617),
            "Prabumulih" => (-3.4324, 104.2350),
            "Pagar Alam" => (-4.0167, 103.2500),
            "Lahat" => (-3.7864, 103.5428),
        },
    },
    Province {
        name: "Kepulauan Bangka Belitung",
        timezone: WIB,
        cities: cities! {
            "Pangkal Pinang" => (-2.1316, 106.1170),
            "Tanjung Pandan" => (-2.7500, 107.6500),
            "Muntok" => (-2.0614, 105.1647),
        },
    },
    Province {
        name: "Bengkulu",
        timezone: WIB,
        cities: cities! {
            "Bengkulu" => (-3.7928, 102.2608),
            "Curup" => (-3.4700, 102.5200),
            "Manna" => (-4.4643, 102.9041),
        },
    },
    Province {
        name: "Lampung",
        timezone: WIB,
        cities: cities! {
            "Bandar Lampung" => (-5.3971, 105.2668),
            "Metro" => (-5.1131, 105.3067),
            "Kotabumi" => (-4.8333, 104.9000),
            "Kalianda" => (-5.7167, 105.5833),
        },
    },
    Province {
        name: "DKI Jakarta",
        timezone: WIB,
        cities: cities! {
            "Jakarta Pusat" => (-6.1865, 106.8341),
            "Jakarta Utara" => (-6.1384, 106.8660),
            "Jakarta Barat" => (-6.1676, 106.7637),
            "Jakarta Selatan" => (-6.2615, 106.8106),
            "Jakarta Timur" => (-6.2250, 106.9004),
            "Kepulauan Seribu" => (-5.6122, 106.6170),
        },
    },
    Province {
        name: "Banten",
        timezone: WIB,
        cities: cities! {
            "Serang" => (-6.1200, 106.1503),
            "Tangerang" => (-6.1783, 106.6319),
            "Tangerang Selatan" => (-6.2886, 106.7180),
            "Cilegon" => (-6.0025, 106.0111),
            "Pandeglang" => (-6.3086, 106.1061),
            "Rangkasbitung" => (-6.3592, 106.2489),
        },
    },
    Province {
        name: "Jawa Barat",
        timezone: WIB,
        cities: cities! {
            "Bandung" => (-6.9175, 107.6191),
            "Bogor" => (-6.5971, 106.8060),
            "Bekasi" => (-6.2383, 106.9756),
            "Depok" => (-6.4025, 106.7942),
            "Cirebon" => (-6.7320, 108.5523),
            "Sukabumi" => (-6.9277, 106.9300),
            "Tasikmalaya" => (-7.3274, 108.2207),
            "Cimahi" => (-6.8722, 107.5425),
            "Banjar" => (-7.3707, 108.5342),
            "Garut" => (-7.2279, 107.9087),
            "Karawang" => (-6.3227, 107.3376),
        },
    },
    Province {
        name: "Jawa Tengah",
        timezone: WIB,
        cities: cities! {
            "Semarang" => (-6.9667, 110.4167),
            "Surakarta" => (-7.5755, 110.8243),
            "Magelang" => (-7.4797, 110.2177),
            "Pekalongan" => (-6.8898, 109.6746),
            "Tegal" => (-6.8694, 109.1402),
            "Salatiga" => (-7.3305, 110.5084),
            "Purwokerto" => (-7.4246, 109.2396),
            "Kudus" => (-6.8048, 110.8405),
            "Cilacap" => (-7.7279, 109.0096),
        },
    },
    Province {
        name: "DI Yogyakarta",
        timezone: WIB,
        cities: cities! {
            "Yogyakarta" => (-7.7956, 110.3695),
            "Sleman" => (-7.7164, 110.3556),
            "Bantul" => (-7.8881, 110.3289),
            "Wonosari" => (-7.9653, 110.6006),
            "Wates" => (-7.8573, 110.1585),
        },
    },
    Province {
        name: "Jawa Timur",
        timezone: WIB,
        cities: cities! {
            "Surabaya" => (-7.2575, 112.7521),
            "Malang" => (-7.9666, 112.6326),
            "Kediri" => (-7.8480, 112.0178),
            "Madiun" => (-7.6298, 111.5239),
            "Blitar" => (-8.0954, 112.1609),
            "Probolinggo" => (-7.7543, 113.2159),
            "Pasuruan" => (-7.6453, 112.9075),
            "Mojokerto" => (-7.4722, 112.4338),
            "Batu" => (-7.8672, 112.5239),
            "Jember" => (-8.1724, 113.7005),
            "Banyuwangi" => (-8.2192, 114.3691),
            "Pamekasan" => (-7.1568, 113.4746),
        },
    },
    Province {
        name: "Bali",
        timezone: WITA,
        cities: cities! {
            "Denpasar" => (-8.6705, 115.2126),
            "Singaraja" => (-8.1120, 115.0882),
            "Tabanan" => (-8.5376, 115.1253),
            "Gianyar" => (-8.5442, 115.3253),
            "Amlapura" => (-8.4500, 115.6072),
            "Negara" => (-8.3576, 114.6211),
        },
    },
    Province {
        name: "Nusa Tenggara Barat",
        timezone: WITA,
        cities: cities! {
            "Mataram" => (-8.5833, 116.1167),
            "Bima" => (-8.4606, 118.7270),
            "Sumbawa Besar" => (-8.5000, 117.4167),
            "Praya" => (-8.7056, 116.2706),
            "Dompu" => (-8.5365, 118.4634),
        },
    },
    Province {
        name: "Nusa Tenggara Timur",
        timezone: WITA,
        cities: cities! {
            "Kupang" => (-10.1772, 123.6070),
            "Ende" => (-8.8432, 121.6623),
            "Maumere" => (-8.6199, 122.2111),
            "Labuan Bajo" => (-8.4964, 119.8877),
            "Waingapu" => (-9.6567, 120.2641),
            "Atambua" => (-9.1061, 124.8925),
        },
    },
    Province {
        name: "Kalimantan Barat",
        timezone: WIB,
        cities: cities! {
            "Pontianak" => (-0.0263, 109.3425),
            "Singkawang" => (0.9060, 108.9870),
            "Ketapang" => (-1.8500, 109.9833),
            "Sintang" => (0.0693, 111.4950),
            "Putussibau" => (0.8364, 112.9306),
        },
    },
    Province {
        name: "Kalimantan Tengah",
        timezone: WIB,
        cities: cities! {
            "Palangka Raya" => (-2.2161, 113.9135),
            "Sampit" => (-2.5333, 112.9500),
            "Pangkalan Bun" => (-2.6833, 111.6167),
            "Muara Teweh" => (-0.9500, 114.8833),
        },
    },
    Province {
        name: "Kalimantan Selatan",
        timezone: WITA,
        cities: cities! {
            "Banjarmasin" => (-3.3186, 114.5944),
            "Banjarbaru" => (-3.4420, 114.8310),
            "Kotabaru" => (-3.2964, 116.1675),
            "Barabai" => (-2.5833, 115.3833),
        },
    },
    Province {
        name: "Kalimantan Timur",
        timezone: WITA,
        cities: cities! {
            "Samarinda" => (-0.5022, 117.1536),
            "Balikpapan" => (-1.2379, 116.8529),
            "Bontang" => (0.1333, 117.5000),
            "Tenggarong" => (-0.4167, 116.9833),
            "Tanjung Redeb" => (2.1500, 117.4833),
        },
    },
    Province {
        name: "Kalimantan Utara",
        timezone: WITA,
        cities: cities! {
            "Tanjung Selor" => (2.8375, 117.3653),
            "Tarakan" => (3.3000, 117.6333),
            "Nunukan" => (4.1333, 117.6667),
            "Malinau" => (3.5850, 116.6470),
        },
    },
    Province {
        name: "Sulawesi Utara",
        timezone: WITA,
        cities: cities! {
            "Manado" => (1.4748, 124.8421),
            "Bitung" => (1.4404, 125.1217),
            "Tomohon" => (1.3230, 124.8405),
            "Kotamobagu" => (0.7244, 124.3199),
        },
    },
    Province {
        name: "Gorontalo",
        timezone: WITA,
        cities: cities! {
            "Gorontalo" => (0.5435, 123.0568),
            "Limboto" => (0.6272, 122.9739),
            "Marisa" => (0.4747, 121.9376),
        },
    },
    Province {
        name: "Sulawesi Tengah",
        timezone: WITA,
        cities: cities! {
            "Palu" => (-0.8917, 119.8707),
            "Luwuk" => (-0.9516, 122.7875),
            "Poso" => (-1.3960, 120.7520),
            "Tolitoli" => (1.0419, 120.8127),
        },
    },
    Province {
        name: "Sulawesi Barat",
        timezone: WITA,
        cities: cities! {
            "Mamuju" => (-2.6748, 118.8885),
            "Majene" => (-3.5403, 118.9707),
            "Polewali" => (-3.4167, 119.3333),
        },
    },
    Province {
        name: "Sulawesi Selatan",
        timezone: WITA,
        cities: cities! {
            "Makassar" => (-5.1477, 119.4327),
            "Parepare" => (-4.0135, 119.6255),
            "Palopo" => (-2.9925, 120.1969),
            "Watampone" => (-4.5386, 120.3279),
            "Bulukumba" => (-5.5577, 120.1953),
        },
    },
    Province {
        name: "Sulawesi Tenggara",
        timezone: WITA,
        cities: cities! {
            "Kendari" => (-3.9985, 122.5127),
            "Baubau" => (-5.4667, 122.6333),
            "Kolaka" => (-4.0500, 121.6000),
            "Raha" => (-4.8333, 122.7167),
        },
    },
    Province {
        name: "Maluku",
        timezone: WIT,
        cities: cities! {
            "Ambon" => (-3.6954, 128.1814),
            "Tual" => (-5.6333, 132.7500),
            "Masohi" => (-3.3000, 128.9667),
            "Saumlaki" => (-7.9833, 131.3000),
        },
    },
    Province {
        name: "Maluku Utara",
        timezone: WIT,
        cities: cities! {
            "Ternate" => (0.7893, 127.3753),
            "Sofifi" => (0.7333, 127.5667),
            "Tobelo" => (1.7283, 128.0095),
            "Soasio" => (0.6961, 127.4361),
        },
    },
    Province {
        name: "Papua",
        timezone: WIT,
        cities: cities! {
            "Jayapura" => (-2.5337, 140.7181),
            "Merauke" => (-8.4932, 140.4018),
            "Biak" => (-1.1833, 136.0833),
            "Nabire" => (-3.3667, 135.4833),
            "Timika" => (-4.5500, 136.8833),
            "Wamena" => (-4.0956, 138.9525),
        },
    },
    Province {
        name: "Papua Barat",
        timezone: WIT,
        cities: cities! {
            "Manokwari" => (-0.8615, 134.0620),
            "Sorong" => (-0.8762, 131.2558),
            "Fakfak" => (-2.9256, 132.2968),
            "Kaimana" => (-3.6447, 133.6950),
        },
    },
];

/// Returns every province in the table, in display order.
#[must_use]
pub const fn provinces() -> &'static [Province] {
    PROVINCES
}

/// Iterates every (province, city) pair in the table.
pub fn all_locations() -> impl Iterator<Item = Location> {
    PROVINCES.iter().flat_map(|province| {
        province
            .cities
            .iter()
            .map(move |city| Location { province, city })
    })
}

/// Looks up a (province, city) pair. Both names match exactly.
#[must_use]
pub fn find_location(province: &str, city: &str) -> Option<Location> {
    let province = PROVINCES.iter().find(|p| p.name == province)?;
    let city = province.cities.iter().find(|c| c.name == city)?;
    Some(Location { province, city })
}

/// Looks up a city by name alone.
#[must_use]
pub fn find_city(city: &str) -> Option<Location> {
    all_locations().find(|location| location.city.name == city)
}

/// Returns `true` if the city belongs to the named province.
#[must_use]
pub fn is_valid_location(province: &str, city: &str) -> bool {
    find_location(province, city).is_some()
}

/// The location reported for users who have never saved one.
///
/// # Errors
///
/// Returns an error only if the compiled-in default is missing from the table.
pub fn default_location() -> Result<Location, DomainError> {
    find_location(DEFAULT_PROVINCE, DEFAULT_CITY).ok_or_else(|| DomainError::UnknownLocation {
        province: DEFAULT_PROVINCE.to_string(),
        city: DEFAULT_CITY.to_string(),
    })
}
