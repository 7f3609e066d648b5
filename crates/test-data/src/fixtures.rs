//! Fixed sample data used to build payloads.

use travel_api::types::AccountRegistration;

/// Category titles seeded when the backend has none.
pub const CATEGORY_TITLES: [&str; 8] = [
    "Caminhada",
    "Restaurante",
    "Ar livre",
    "Mergulho",
    "Trilha",
    "Artesanato",
    "Águas",
    "Hotel",
];

pub const ATTRACTION_NAMES: [&str; 7] = [
    "Bioparque do pantanal",
    "Buraco do padre",
    "Lago do amor",
    "Mergulho nas águas",
    "Penhasco Alto",
    "Praia de areia",
    "Trilha reta",
];

pub const ESTABLISHMENT_NAMES: [&str; 7] = [
    "Artesanatos Swift",
    "Bar Taboa",
    "Hotel Transilvânia",
    "Juanita Restaurante",
    "Artigos de bonito",
    "Pesque e relaxe",
    "Barreto Steak",
];

/// Checklist items an attraction may ask visitors to bring.
pub const WHAT_TO_TAKE: [&str; 6] = [
    "Tênis de corrida",
    "Garrafa de água",
    "Protetor solar",
    "Roupa de natação",
    "Guarda-chuva",
    "Binóculos",
];

/// Neighbourhood names used when composing addresses.
pub const NEIGHBORHOODS: [&str; 8] = [
    "Centro",
    "Jardim América",
    "Vila Nova",
    "Santa Fé",
    "São Francisco",
    "Boa Vista",
    "Jardim dos Estados",
    "Vila Planalto",
];

/// Administrator account created first; its login yields the bearer token.
pub fn admin() -> AccountRegistration {
    AccountRegistration {
        name: "admin".to_string(),
        phone: "+55067005400000".to_string(),
        email: "admin@email.com".to_string(),
        password: "2022@Admin".to_string(),
    }
}

/// Fixed tourist identity. Favourite categories are drawn per run.
pub struct TouristFixture {
    pub name: &'static str,
    pub lastname: &'static str,
    pub age: u32,
    pub phone: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub const TOURIST: TouristFixture = TouristFixture {
    name: "Lucas",
    lastname: "Bezerra",
    age: 23,
    phone: "+55067991882244",
    email: "lucas@email.com",
    password: "2022@Lucas",
};

pub fn agency() -> AccountRegistration {
    AccountRegistration {
        name: "Tree Trip".to_string(),
        phone: "+55067991881014".to_string(),
        email: "treetrip@email.com".to_string(),
        password: "2022@Tree".to_string(),
    }
}

pub fn business() -> AccountRegistration {
    AccountRegistration {
        name: "Hotel Transilvânia".to_string(),
        phone: "+550670000990".to_string(),
        email: "hotel@email.com".to_string(),
        password: "2022@Hotel".to_string(),
    }
}
