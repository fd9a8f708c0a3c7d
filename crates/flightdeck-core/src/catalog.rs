//! Static value pools the stage generators draw from.

/// An airline together with its two-letter carrier code.
#[derive(Debug, Clone, Copy)]
pub struct Carrier {
    pub name: &'static str,
    pub code: &'static str,
}

/// An airport code with its city.
#[derive(Debug, Clone, Copy)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
}

pub const CARRIERS: &[Carrier] = &[
    Carrier { name: "Pakistan Airlines", code: "PK" },
    Carrier { name: "Emirates", code: "EK" },
    Carrier { name: "Qatar Airways", code: "QR" },
    Carrier { name: "Turkish Airlines", code: "TK" },
    Carrier { name: "Saudi Arabian", code: "SV" },
    Carrier { name: "Etihad", code: "EY" },
    Carrier { name: "Air China", code: "CA" },
    Carrier { name: "Singapore Airlines", code: "SQ" },
    Carrier { name: "British Airways", code: "BA" },
    Carrier { name: "Lufthansa", code: "LH" },
    Carrier { name: "Air France", code: "AF" },
    Carrier { name: "American Airlines", code: "AA" },
    Carrier { name: "Delta", code: "DL" },
    Carrier { name: "United", code: "UA" },
    Carrier { name: "Cathay Pacific", code: "CX" },
    Carrier { name: "Qantas", code: "QF" },
    Carrier { name: "ANA", code: "NH" },
    Carrier { name: "Korean Air", code: "KE" },
];

pub const AIRPORTS: &[Airport] = &[
    Airport { code: "ISL", city: "Islamabad" },
    Airport { code: "LHE", city: "Lahore" },
    Airport { code: "KHI", city: "Karachi" },
    Airport { code: "PEW", city: "Peshawar" },
    Airport { code: "DXB", city: "Dubai" },
    Airport { code: "AUH", city: "Abu Dhabi" },
    Airport { code: "DOH", city: "Doha" },
    Airport { code: "IST", city: "Istanbul" },
    Airport { code: "JED", city: "Jeddah" },
    Airport { code: "RUH", city: "Riyadh" },
    Airport { code: "BKK", city: "Bangkok" },
    Airport { code: "SIN", city: "Singapore" },
    Airport { code: "KUL", city: "Kuala Lumpur" },
    Airport { code: "HKG", city: "Hong Kong" },
    Airport { code: "NRT", city: "Tokyo" },
    Airport { code: "ICN", city: "Seoul" },
    Airport { code: "LHR", city: "London" },
    Airport { code: "CDG", city: "Paris" },
    Airport { code: "FRA", city: "Frankfurt" },
    Airport { code: "AMS", city: "Amsterdam" },
    Airport { code: "JFK", city: "New York" },
    Airport { code: "LAX", city: "Los Angeles" },
    Airport { code: "ORD", city: "Chicago" },
    Airport { code: "YYZ", city: "Toronto" },
    Airport { code: "SYD", city: "Sydney" },
    Airport { code: "MEL", city: "Melbourne" },
];

pub const FIRST_NAMES: &[&str] = &[
    "Ali", "Ahmed", "Mohammad", "Hassan", "Omar", "Usman", "Bilal", "Kamran",
    "Sara", "Fatima", "Ayesha", "Zainab", "Maryam", "Hina", "Sana", "Nadia",
];

pub const LAST_NAMES: &[&str] = &[
    "Khan", "Ahmed", "Malik", "Raza", "Hussain", "Shah", "Butt", "Chaudhry",
    "Ali", "Rehman", "Sheikh", "Hashmi", "Qureshi", "Mirza", "Baig",
];

pub const TERMINALS: &[char] = &['A', 'B', 'C', 'D'];

pub const SEAT_CAPACITIES: &[u32] = &[120, 150, 180, 200, 250, 300];

pub const SEAT_LETTERS: &[char] = &['A', 'B', 'C', 'D', 'E', 'F'];

/// Minutes of the quarter-hour grid departure and arrival times sit on.
pub const MINUTE_GRID: &[u32] = &[0, 15, 30, 45];
