//! Instrument registry for the scan universe

use serde::{Deserialize, Serialize};

/// A single listed instrument in the scan universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
    pub display_name: String,
    /// Index-tracking proxies (ETFs) carry no earnings of their own and are
    /// excluded from valuation-based signals.
    #[serde(default)]
    pub index_proxy: bool,
}

impl Instrument {
    pub fn new(symbol: &str, display_name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            display_name: display_name.to_string(),
            index_proxy: false,
        }
    }

    pub fn index_proxy(symbol: &str, display_name: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            display_name: display_name.to_string(),
            index_proxy: true,
        }
    }

    /// Symbol without the exchange suffix, for display.
    pub fn short_symbol(&self) -> &str {
        self.symbol.strip_suffix(".TW").unwrap_or(&self.symbol)
    }
}

/// Static registry of instruments scanned per run. Pure data, no logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentUniverse {
    instruments: Vec<Instrument>,
}

impl InstrumentUniverse {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// The Taiwan 50 constituents plus the 0050 index proxy.
    pub fn tw50() -> Self {
        let mut instruments: Vec<Instrument> = TW50
            .iter()
            .map(|(symbol, name)| Instrument::new(symbol, name))
            .collect();
        instruments.push(Instrument::index_proxy("0050.TW", "元大台灣50"));
        Self::new(instruments)
    }
}

const TW50: &[(&str, &str)] = &[
    ("2330.TW", "台積電"),
    ("2317.TW", "鴻海"),
    ("2454.TW", "聯發科"),
    ("2308.TW", "台達電"),
    ("2303.TW", "聯電"),
    ("2881.TW", "富邦金"),
    ("2882.TW", "國泰金"),
    ("2382.TW", "廣達"),
    ("2891.TW", "中信金"),
    ("2886.TW", "兆豐金"),
    ("2884.TW", "玉山金"),
    ("2885.TW", "元大金"),
    ("2412.TW", "中華電"),
    ("2892.TW", "第一金"),
    ("1216.TW", "統一"),
    ("2880.TW", "華南金"),
    ("5880.TW", "合庫金"),
    ("2883.TW", "開發金"),
    ("2887.TW", "台新金"),
    ("2357.TW", "華碩"),
    ("3711.TW", "日月光投控"),
    ("2327.TW", "國巨"),
    ("2395.TW", "研華"),
    ("2379.TW", "瑞昱"),
    ("2890.TW", "永豐金"),
    ("3008.TW", "大立光"),
    ("3231.TW", "緯創"),
    ("1101.TW", "台泥"),
    ("3034.TW", "聯詠"),
    ("2002.TW", "中鋼"),
    ("2345.TW", "智邦"),
    ("3045.TW", "台灣大"),
    ("4938.TW", "和碩"),
    ("5871.TW", "中租-KY"),
    ("2603.TW", "長榮"),
    ("2888.TW", "新光金"),
    ("2408.TW", "南亞科"),
    ("3037.TW", "欣興"),
    ("6669.TW", "緯穎"),
    ("1303.TW", "南亞"),
    ("1301.TW", "台塑"),
    ("5876.TW", "上海商銀"),
    ("3017.TW", "奇鋐"),
    ("1326.TW", "台化"),
    ("2912.TW", "統一超"),
    ("4904.TW", "遠傳"),
    ("2301.TW", "光寶科"),
    ("1605.TW", "華新"),
    ("1102.TW", "亞泥"),
    ("2207.TW", "和泰車"),
];
