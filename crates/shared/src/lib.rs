/// Static site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Solana cluster the minting pipeline will target
    pub network: &'static str,

    pub contact: Contact,
    pub links: Links,
}

pub struct Contact {
    pub twitter: &'static str,
}

pub struct Links {
    pub pump_fun: &'static str,
}

pub static CONFIG: Config = Config {
    name: "MAKIMO.LIVE",
    tagline: "Create Your AI VTuber",

    network: "mainnet-beta",

    contact: Contact { twitter: "makimolive" },

    links: Links {
        pump_fun: "https://pump.fun/live/makimo",
    },
};
