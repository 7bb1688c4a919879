//! Countries used in addresses and legal-entity registration locations

described_enum! {
    /// A country as presented on the register
    Country {
        Afghanistan => "Afghanistan",
        Albania => "Albania",
        Algeria => "Algeria",
        AmericanSamoa => "American Samoa",
        Andorra => "Andorra",
        Angola => "Angola",
        Anguilla => "Anguilla",
        AntiguaAndBarbuda => "Antigua and Barbuda",
        Argentina => "Argentina",
        Armenia => "Armenia",
        Aruba => "Aruba",
        Australia => "Australia",
        Austria => "Austria",
        Azerbaijan => "Azerbaijan",
        Bahamas => "Bahamas",
        Bahrain => "Bahrain",
        Bangladesh => "Bangladesh",
        Barbados => "Barbados",
        Belarus => "Belarus",
        Belgium => "Belgium",
        Belize => "Belize",
        Benin => "Benin",
        Bermuda => "Bermuda",
        Bhutan => "Bhutan",
        Bolivia => "Bolivia",
        BosniaAndHerzegovina => "Bosnia and Herzegovina",
        Botswana => "Botswana",
        Brazil => "Brazil",
        BritishVirginIslands => "British Virgin Islands",
        Brunei => "Brunei",
        Bulgaria => "Bulgaria",
        BurkinaFaso => "Burkina Faso",
        Burundi => "Burundi",
        Cambodia => "Cambodia",
        Cameroon => "Cameroon",
        Canada => "Canada",
        CapeVerde => "Cape Verde",
        CaymanIslands => "Cayman Islands",
        CentralAfricanRepublic => "Central African Republic",
        Chad => "Chad",
        Chile => "Chile",
        China => "China",
        Colombia => "Colombia",
        Comoros => "Comoros",
        Congo => "Congo",
        CookIslands => "Cook Islands",
        CostaRica => "Costa Rica",
        Croatia => "Croatia",
        Cuba => "Cuba",
        Cyprus => "Cyprus",
        CzechRepublic => "Czech Republic",
        DemocraticRepublicOfCongo => "Democratic Republic of Congo",
        Denmark => "Denmark",
        Djibouti => "Djibouti",
        Dominica => "Dominica",
        DominicanRepublic => "Dominican Republic",
        EastTimor => "East Timor",
        Ecuador => "Ecuador",
        Egypt => "Egypt",
        ElSalvador => "El Salvador",
        England => "England",
        EquatorialGuinea => "Equatorial Guinea",
        Eritrea => "Eritrea",
        Estonia => "Estonia",
        Eswatini => "Eswatini",
        Ethiopia => "Ethiopia",
        FalklandIslands => "Falkland Islands",
        FaroeIslands => "Faroe Islands",
        Fiji => "Fiji",
        Finland => "Finland",
        France => "France",
        Gabon => "Gabon",
        Gambia => "Gambia",
        Georgia => "Georgia",
        Germany => "Germany",
        Ghana => "Ghana",
        Gibraltar => "Gibraltar",
        Greece => "Greece",
        Greenland => "Greenland",
        Grenada => "Grenada",
        Guam => "Guam",
        Guatemala => "Guatemala",
        Guernsey => "Guernsey",
        Guinea => "Guinea",
        GuineaBissau => "Guinea-Bissau",
        Guyana => "Guyana",
        Haiti => "Haiti",
        Honduras => "Honduras",
        HongKong => "Hong Kong",
        Hungary => "Hungary",
        Iceland => "Iceland",
        India => "India",
        Indonesia => "Indonesia",
        Iran => "Iran",
        Iraq => "Iraq",
        Ireland => "Ireland",
        IsleOfMan => "Isle of Man",
        Israel => "Israel",
        Italy => "Italy",
        IvoryCoast => "Ivory Coast",
        Jamaica => "Jamaica",
        Japan => "Japan",
        Jersey => "Jersey",
        Jordan => "Jordan",
        Kazakhstan => "Kazakhstan",
        Kenya => "Kenya",
        Kiribati => "Kiribati",
        Kosovo => "Kosovo",
        Kuwait => "Kuwait",
        Kyrgyzstan => "Kyrgyzstan",
        Laos => "Laos",
        Latvia => "Latvia",
        Lebanon => "Lebanon",
        Lesotho => "Lesotho",
        Liberia => "Liberia",
        Libya => "Libya",
        Liechtenstein => "Liechtenstein",
        Lithuania => "Lithuania",
        Luxembourg => "Luxembourg",
        Macao => "Macao",
        Madagascar => "Madagascar",
        Malawi => "Malawi",
        Malaysia => "Malaysia",
        Maldives => "Maldives",
        Mali => "Mali",
        Malta => "Malta",
        MarshallIslands => "Marshall Islands",
        Mauritania => "Mauritania",
        Mauritius => "Mauritius",
        Mexico => "Mexico",
        Micronesia => "Micronesia",
        Moldova => "Moldova",
        Monaco => "Monaco",
        Mongolia => "Mongolia",
        Montenegro => "Montenegro",
        Montserrat => "Montserrat",
        Morocco => "Morocco",
        Mozambique => "Mozambique",
        Myanmar => "Myanmar",
        Namibia => "Namibia",
        Nauru => "Nauru",
        Nepal => "Nepal",
        Netherlands => "Netherlands",
        NewZealand => "New Zealand",
        Nicaragua => "Nicaragua",
        Niger => "Niger",
        Nigeria => "Nigeria",
        NorthKorea => "North Korea",
        NorthMacedonia => "North Macedonia",
        NorthernIreland => "Northern Ireland",
        Norway => "Norway",
        Oman => "Oman",
        Pakistan => "Pakistan",
        Palau => "Palau",
        Panama => "Panama",
        PapuaNewGuinea => "Papua New Guinea",
        Paraguay => "Paraguay",
        Peru => "Peru",
        Philippines => "Philippines",
        PitcairnIslands => "Pitcairn Islands",
        Poland => "Poland",
        Portugal => "Portugal",
        PuertoRico => "Puerto Rico",
        Qatar => "Qatar",
        Romania => "Romania",
        Russia => "Russia",
        Rwanda => "Rwanda",
        SaintHelenaAscensionAndTristanDaCunha => "Saint Helena, Ascension and Tristan da Cunha",
        SaintKittsAndNevis => "Saint Kitts and Nevis",
        SaintLucia => "Saint Lucia",
        SaintVincentAndTheGrenadines => "Saint Vincent and the Grenadines",
        Samoa => "Samoa",
        SanMarino => "San Marino",
        SaoTomeAndPrincipe => "Sao Tome and Principe",
        SaudiArabia => "Saudi Arabia",
        Scotland => "Scotland",
        Senegal => "Senegal",
        Serbia => "Serbia",
        Seychelles => "Seychelles",
        SierraLeone => "Sierra Leone",
        Singapore => "Singapore",
        Slovakia => "Slovakia",
        Slovenia => "Slovenia",
        SolomonIslands => "Solomon Islands",
        Somalia => "Somalia",
        SouthAfrica => "South Africa",
        SouthKorea => "South Korea",
        SouthSudan => "South Sudan",
        Spain => "Spain",
        SriLanka => "Sri Lanka",
        Sudan => "Sudan",
        Suriname => "Suriname",
        Sweden => "Sweden",
        Switzerland => "Switzerland",
        Syria => "Syria",
        Taiwan => "Taiwan",
        Tajikistan => "Tajikistan",
        Tanzania => "Tanzania",
        Thailand => "Thailand",
        Togo => "Togo",
        Tonga => "Tonga",
        TrinidadAndTobago => "Trinidad and Tobago",
        Tunisia => "Tunisia",
        Turkey => "Turkey",
        Turkmenistan => "Turkmenistan",
        TurksAndCaicosIslands => "Turks and Caicos Islands",
        Tuvalu => "Tuvalu",
        Uganda => "Uganda",
        Ukraine => "Ukraine",
        UnitedArabEmirates => "United Arab Emirates",
        UnitedKingdom => "United Kingdom",
        UnitedStates => "United States",
        Uruguay => "Uruguay",
        Uzbekistan => "Uzbekistan",
        Vanuatu => "Vanuatu",
        VaticanCity => "Vatican City",
        Venezuela => "Venezuela",
        Vietnam => "Vietnam",
        Wales => "Wales",
        WallisAndFutuna => "Wallis and Futuna",
        Yemen => "Yemen",
        Zambia => "Zambia",
        Zimbabwe => "Zimbabwe",
    }
}

impl Country {
    /// Countries whose addresses must carry a UK postcode
    pub fn is_uk(&self) -> bool {
        matches!(
            self,
            Country::England
                | Country::Wales
                | Country::Scotland
                | Country::NorthernIreland
                | Country::UnitedKingdom
        )
    }
}
