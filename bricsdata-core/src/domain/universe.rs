//! The fixed collection universe: BRICS countries, World Bank indicators,
//! and the commodity futures tracked on Yahoo Finance.

use serde::Serialize;

/// A country as identified by the World Bank (ISO 3166-1 alpha-2 code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

/// A macroeconomic series: short name used for file naming, provider code used in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Indicator {
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

/// A futures contract: Yahoo ticker and the column name its close is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Commodity {
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const BRICS: [Country; 5] = [
    Country { code: "BR", name: "Brazil" },
    Country { code: "RU", name: "Russia" },
    Country { code: "IN", name: "India" },
    Country { code: "CN", name: "China" },
    Country { code: "ZA", name: "South Africa" },
];

pub const INDICATORS: [Indicator; 6] = [
    Indicator {
        name: "gdp",
        code: "NY.GDP.MKTP.CD",
        description: "GDP (current US$)",
    },
    Indicator {
        name: "gdp_growth",
        code: "NY.GDP.MKTP.KD.ZG",
        description: "GDP growth (annual %)",
    },
    Indicator {
        name: "inflation",
        code: "FP.CPI.TOTL.ZG",
        description: "Inflation, consumer prices (annual %)",
    },
    Indicator {
        name: "trade",
        code: "NE.TRD.GNFS.ZS",
        description: "Trade (% of GDP)",
    },
    Indicator {
        name: "exports",
        code: "NE.EXP.GNFS.CD",
        description: "Exports of goods and services (current US$)",
    },
    Indicator {
        name: "reserves",
        code: "FI.RES.TOTL.CD",
        description: "Total reserves including gold (current US$)",
    },
];

pub const COMMODITIES: [Commodity; 4] = [
    Commodity { symbol: "CL=F", name: "Crude_Oil" },
    Commodity { symbol: "GC=F", name: "Gold" },
    Commodity { symbol: "HG=F", name: "Copper" },
    Commodity { symbol: "ZC=F", name: "Corn" },
];
