//! Built-in assets.

/// Image shown when no `src` is set: a 64x64 PNG inlined as a data URI.
pub const PLACEHOLDER_IMAGE: &str = concat!(
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAEAAAABACAYAAACqaXHeAAAAGXRFWH",
    "RTb2Z0d2FyZQBBZG9iZSBJbWFnZVJlYWR5ccllPAAACgVJREFUeNrkW0tolFcU/mf8NZr4SqJNbY",
    "wyEaOuUsRdunAjSAuuS1ddVnCZZdttla4s4rYrFy4KunCnIEgEMZRWKM2iFrowaGJM0GjiI0n/7z",
    "ZfOHPm3NeM3bQ/3GTmv89z7nee905tbW2t+D8/Jf7UarWml+fPn28MDQ0NLy0tFSsrK64ejHr37p",
    "2rx2e8X11ddd/xGXVkpnzPz3hev369MRfq8Lx9+3ajHv3xXfaRG4T37IcHc2I8jiHrZb8tW7YUU1",
    "NTf01OTv5hMoDPhQsX+kdGRsb379//5cDAwIdv3rwpLAbh2bRpk5uM//lOP/V6fWNx8rPug+9cNB",
    "luPZoh1nuOx7Wh7s6dO7NHjx69cuPGje/n5+en2a6GSkx46dKlD44cOfLT6OjoJ8vLy8XLly+bBr",
    "SYQIJCj9WP76w6a2zZzvc51A//d+7cWTx+/Bh0Tl6+fPnzanMfNiGgr6/vWxA/MzPjOFcxI8j92O",
    "500uZ9jwcGPH36tOjv7y/Onj17YmJi4pv79+9/VVUtO3ZdvHhxpNFofPHq1StHfCUGbmAWQA1Fvt",
    "N1KfVWG13va5vSJjT/nj17Cui0SryLsbGxzyqyRx1i8GfHjh0H9+3b14sGhw8fNieJLaCdespnDq",
    "Epa7LWDoVZobx48eJFcfr06b7u7u5TAEe5rolXqZTYKRdy1CW+NqzXdbHvnYqSpTQPHTpUr94PQg",
    "eXWut2woDYI7V26qK1otOmlt+lBZF9ZWEbWDf2L7WykHY2lQn/xq5JNEm4y3cpY5J4yRzZp9Sc1r",
    "bVtwOdEG/tllxHSIF2ylyYSTlvqb0xOREahmAbW5DPoQnVSU+TnqQlErExfGssy9JGgPSg2oFyTA",
    "nGiCezMT82xEKaz3GyxgqtNQkBqcTEXFerLVElF0LCY1D3zedTnJa4SZe9JRji4nzQz4GebKd1jK",
    "wD4bDTRJ8eX8O+Ha+SjNcoKuWioCCkCOTKlybYx0S2o4PCnbcgTqJTmG4xn7EB6EKMs3v37lYGSK",
    "LhKW3bts11lKaGA+YsJLYbsMdS/FKDqphc601AgZeLAG9wcNAOhxk6IhiqXONi+/btxebNm9sydZ",
    "JZ1kIxD3IDYIAVUYYUXi6jgTDsPArXJ0PvFgRgRxYWFlwHMAJo8CmukLKUSJEwxjggnskRy+pY84",
    "Wsh4VSFOw66GAih8zGZrNfaSk8fEdkiM5gQE9Pj8uqyORHDAlShOTCSDwTFpog9Et1mUM+BOeQDP",
    "GmxEKDkRFbt251hYwIKS0qU40OKiKgTDNTokUzMCYiRBJNKVNlOklirddEgG6IesoRFt7V1eU8Ku",
    "gI2lS52yReMonMZO5QMsgywyGkkTm0IsxJchxfViiGAFBQi6W9qFEpS7KAIRpu/EylZ8kyCbLsvW",
    "xv5QGIFgvmFvGmHxDL4fnycVwEYIdFgDH4TyWDz0AKdoc5Rh2MUFPLIMiX2QmtJeWdZbHqAm5rqU",
    "lPPaiUMQlD6oqQo9NOApSfibyUZKmvjdQBdUtxxAbVCkaHsNAbi4uLjslyTOmPx3bOUmJW/1CW2h",
    "fWl3oSaxAfd30T8j2VHSAOUQjNlSO/1vlD6nr1mstQuioEK9/iJXEMb1OYlgP7mBhlH43pEyAZRL",
    "RDvFRuPBGiUkyxzSmwTzkMiY2nRcCZQTg70uTo/JtPdq1F0Ebju6Wsck6LrHl9YpODjFIcYrre09",
    "PTzuOjo0PPj1rdiu0ls6SSoSJkUBU7KoshK0Sw7/wypsSbHKGqUe3Ro0eOAfD2QDwWD2ag6J3EZ9",
    "axSLstEZNi6lJFIYUplrh5RWBdWTkRgM1Gef78uclJOjn4z/gAwRIKkaOTESnEW21yXNoUXWHlDE",
    "rL79a5dMtXxwDw7lDm5ubcYpFDwAHk3r17HXrkfYDcU+AY01J0RWjnW/yA6kVNE5ti52UEh2wSHB",
    "8wBGhAPgGM8CVIfAvMcZLagb3pCdbW38jgIpTPsxjFGx4oiPzgAUKX9Pb2uryC7O/zNHMUoW+zYs",
    "S3ZIRkKhw7R/udGlNbbTAeRIAMgXhATzDDZDHSZyrbMZEp7nCLDgABu3btcrvHjIp0ISUyZJhqZY",
    "CkrCFKxHjQF0BDd3e3sy5yp7QJjfn3OQFPiGFmOIwFQnbBCCABml0TrweUfoD2C9gP+uHJkycOBV",
    "CUQATHk7FCp6Yux9SWPi5ih3CvBm4yszg67y/tPF1dvtMJDIkSIAIOF+aA1QDqNGpyZD6EDMksHZ",
    "d4zaB0dNCR+Xud4pLpMJ0TkAyRppPMYO5udnbWZaGheygeMcJSFZ7UNbBMEMFGo9HKAK2QpKuLzz",
    "RlVI46JtC7IVFCNGkPkUESU2XMFoMBsBwQE/y3LFJqNggPxBjmGcRbhzBl6gEomAA5lbcrYhpXK0",
    "yJCjJBogiLxILBMCACzJAKk7pI99PpNJnah0fLHKa8pNlkBnlwELu0QAUp9UKOhvahReYiiDT4EG",
    "AICWdcwhhFxidcH5HE80Yi1hLtJkcotHCdvcXDdDgmkfojx1NrOqMXFkCKCXeSYbW8wKnzC/p76s",
    "FumXooSc3OiVjI7Vh/6S3qIyzNPMunsO4DaFGklk/JE1j5APOIWys86fgQSoSt79wu1S+3GBEjxC",
    "I2dAfJmxP0+fna1Fn+ALW1JXOa+NDi9A5v5O4VtH2oCB2nyXGk2DblBEO7FjryBtHMHFH55Ob7fY",
    "6QFp1UxygUeZp+QDtZWn0RAZPIU2QZS+QcV4VS9Nb8qXlBq33ZborZd4JLx4kpcRlZhlAUW6iP+R",
    "ZKQnR4XeEYbEOctyalG40if9GR696musQ5+cUWMyg9K9/Ni5QEhTlBZeMxNpFgXYOLMT1HpnOZU8",
    "pIKRSB+XKEKQuibuDvjqTJbOdXJ53eH2q5KYoFhQ4ufAnFmMtriQq9SJ4a68ApZfEpp8xZjpC81Z",
    "HK+VDGxpcd0mE2xIPKUt9RzoV+O8S35ARD3M45zEiBHxEHJpABsryPOb1y/0/sUZMIqPuSIqFjJ9",
    "91l1TxkK42x5PMSP1NQI41QN2DBw9WqvGd91dfPw/88/bt23OoHB4eTsrEWotL0cy+i5GcC7sD1x",
    "qF+iKmYFOfY8eOuf9Xr15drP79AvC73hMTEw/v3r17BaHmwMCAY0JIKfnkPgealmLVFytBPKwHcw",
    "Ayjs9dB4gfGhoqJicni1u3bv1evfoZDNj44eSBAwc+OnPmzPVz586dQDI0pmxyzupyz/lSMrupsJ",
    "fvQfz4+PjCvXv3vqu+/oBEdU0qugpyw8ePH/96bGzs05MnTw7g94PWZUbrtob+GS3r+b7dR48n56",
    "IJ19Gh1kuVzBfXrl2bv3nz5tSzZ8+uV69+rMqMa2vY1a6qfNzT03OqUhSDod8N+ELo1KyMTLx2+q",
    "vUUH01B3zxX9fLb1VZ2kBI5GZ2Wfw3HhCInWwxdX8LMAAcQNKqYlpp1gAAAABJRU5ErkJggg==",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_png_data_uri() {
        assert!(PLACEHOLDER_IMAGE.starts_with("data:image/png;base64,iVBORw0KGgo"));
        assert!(PLACEHOLDER_IMAGE.ends_with("=="));
        assert!(!PLACEHOLDER_IMAGE.contains(char::is_whitespace));
    }
}
