/// Column order of a monthly forecast row, as consumed by exporters.
pub const FORECAST_COLUMNS: [&str; 12] = [
    "month",
    "date",
    "mrr",
    "revenue",
    "cogs",
    "gross_profit",
    "opex_rnd",
    "opex_sm",
    "opex_ga",
    "ebitda",
    "operating_cf",
    "cash_balance",
];
