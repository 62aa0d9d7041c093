//! ISO 3166-1 country table: (alpha-3, alpha-2, name, aliases)

pub(super) const WORLD: &[(&str, &str, &str, &[&str])] = &[
    ("AFG", "AF", "Afghanistan", &[]),
    ("ALA", "AX", "Åland Islands", &["Aland"]),
    ("ALB", "AL", "Albania", &["Albanie"]),
    ("DZA", "DZ", "Algeria", &["Algérie"]),
    ("ASM", "AS", "American Samoa", &[]),
    ("AND", "AD", "Andorra", &["Andorre"]),
    ("AGO", "AO", "Angola", &[]),
    ("AIA", "AI", "Anguilla", &[]),
    ("ATA", "AQ", "Antarctica", &["Antarctique"]),
    ("ATG", "AG", "Antigua and Barbuda", &["Antigua-et-Barbuda"]),
    ("ARG", "AR", "Argentina", &["Argentine"]),
    ("ARM", "AM", "Armenia", &["Arménie"]),
    ("ABW", "AW", "Aruba", &[]),
    ("AUS", "AU", "Australia", &["Australie"]),
    ("AUT", "AT", "Austria", &["Autriche"]),
    ("AZE", "AZ", "Azerbaijan", &["Azerbaïdjan"]),
    ("BHS", "BS", "Bahamas", &["The Bahamas"]),
    ("BHR", "BH", "Bahrain", &["Bahreïn"]),
    ("BGD", "BD", "Bangladesh", &[]),
    ("BRB", "BB", "Barbados", &["Barbade"]),
    ("BLR", "BY", "Belarus", &["Biélorussie"]),
    ("BEL", "BE", "Belgium", &["Belgique"]),
    ("BLZ", "BZ", "Belize", &[]),
    ("BEN", "BJ", "Benin", &["Bénin"]),
    ("BMU", "BM", "Bermuda", &["Bermudes"]),
    ("BTN", "BT", "Bhutan", &["Bhoutan"]),
    ("BOL", "BO", "Bolivia", &["Bolivie"]),
    ("BES", "BQ", "Bonaire, Sint Eustatius and Saba", &["Caribbean Netherlands"]),
    ("BIH", "BA", "Bosnia and Herzegovina", &["Bosnie-Herzégovine"]),
    ("BWA", "BW", "Botswana", &[]),
    ("BVT", "BV", "Bouvet Island", &[]),
    ("BRA", "BR", "Brazil", &["Brésil", "Brasil"]),
    ("IOT", "IO", "British Indian Ocean Territory", &[]),
    ("BRN", "BN", "Brunei", &["Brunei Darussalam"]),
    ("BGR", "BG", "Bulgaria", &["Bulgarie"]),
    ("BFA", "BF", "Burkina Faso", &[]),
    ("BDI", "BI", "Burundi", &[]),
    ("CPV", "CV", "Cabo Verde", &["Cape Verde", "Cap-Vert"]),
    ("KHM", "KH", "Cambodia", &["Cambodge"]),
    ("CMR", "CM", "Cameroon", &["Cameroun"]),
    ("CAN", "CA", "Canada", &[]),
    ("CYM", "KY", "Cayman Islands", &[]),
    ("CAF", "CF", "Central African Republic", &["République centrafricaine"]),
    ("TCD", "TD", "Chad", &["Tchad"]),
    ("CHL", "CL", "Chile", &["Chili"]),
    ("CHN", "CN", "China", &["Chine"]),
    ("CXR", "CX", "Christmas Island", &[]),
    ("CCK", "CC", "Cocos (Keeling) Islands", &["Cocos Islands"]),
    ("COL", "CO", "Colombia", &["Colombie"]),
    ("COM", "KM", "Comoros", &["Comores"]),
    ("COG", "CG", "Congo", &["Republic of the Congo", "Congo-Brazzaville"]),
    (
        "COD",
        "CD",
        "Democratic Republic of the Congo",
        &["DR Congo", "Congo-Kinshasa", "République démocratique du Congo"],
    ),
    ("COK", "CK", "Cook Islands", &[]),
    ("CRI", "CR", "Costa Rica", &[]),
    ("CIV", "CI", "Côte d'Ivoire", &["Ivory Coast"]),
    ("HRV", "HR", "Croatia", &["Croatie"]),
    ("CUB", "CU", "Cuba", &[]),
    ("CUW", "CW", "Curaçao", &[]),
    ("CYP", "CY", "Cyprus", &["Chypre"]),
    ("CZE", "CZ", "Czechia", &["Czech Republic", "Tchéquie"]),
    ("DNK", "DK", "Denmark", &["Danemark"]),
    ("DJI", "DJ", "Djibouti", &[]),
    ("DMA", "DM", "Dominica", &["Dominique"]),
    ("DOM", "DO", "Dominican Republic", &["République dominicaine"]),
    ("ECU", "EC", "Ecuador", &["Équateur"]),
    ("EGY", "EG", "Egypt", &["Égypte"]),
    ("SLV", "SV", "El Salvador", &["Salvador"]),
    ("GNQ", "GQ", "Equatorial Guinea", &["Guinée équatoriale"]),
    ("ERI", "ER", "Eritrea", &["Érythrée"]),
    ("EST", "EE", "Estonia", &["Estonie"]),
    ("SWZ", "SZ", "Eswatini", &["Swaziland"]),
    ("ETH", "ET", "Ethiopia", &["Éthiopie"]),
    ("FLK", "FK", "Falkland Islands", &["Malvinas"]),
    ("FRO", "FO", "Faroe Islands", &["Féroé"]),
    ("FJI", "FJ", "Fiji", &["Fidji"]),
    ("FIN", "FI", "Finland", &["Finlande"]),
    ("FRA", "FR", "France", &[]),
    ("GUF", "GF", "French Guiana", &["Guyane"]),
    ("PYF", "PF", "French Polynesia", &["Polynésie française"]),
    ("ATF", "TF", "French Southern Territories", &[]),
    ("GAB", "GA", "Gabon", &[]),
    ("GMB", "GM", "Gambia", &["Gambie", "The Gambia"]),
    ("GEO", "GE", "Georgia", &["Géorgie"]),
    ("DEU", "DE", "Germany", &["Allemagne", "Deutschland"]),
    ("GHA", "GH", "Ghana", &[]),
    ("GIB", "GI", "Gibraltar", &[]),
    ("GRC", "GR", "Greece", &["Grèce"]),
    ("GRL", "GL", "Greenland", &["Groenland"]),
    ("GRD", "GD", "Grenada", &["Grenade"]),
    ("GLP", "GP", "Guadeloupe", &[]),
    ("GUM", "GU", "Guam", &[]),
    ("GTM", "GT", "Guatemala", &[]),
    ("GGY", "GG", "Guernsey", &["Guernesey"]),
    ("GIN", "GN", "Guinea", &["Guinée"]),
    ("GNB", "GW", "Guinea-Bissau", &["Guinée-Bissau"]),
    ("GUY", "GY", "Guyana", &[]),
    ("HTI", "HT", "Haiti", &["Haïti"]),
    ("HMD", "HM", "Heard Island and McDonald Islands", &[]),
    ("VAT", "VA", "Holy See", &["Vatican", "Vatican City"]),
    ("HND", "HN", "Honduras", &[]),
    ("HKG", "HK", "Hong Kong", &[]),
    ("HUN", "HU", "Hungary", &["Hongrie"]),
    ("ISL", "IS", "Iceland", &["Islande"]),
    ("IND", "IN", "India", &["Inde"]),
    ("IDN", "ID", "Indonesia", &["Indonésie"]),
    ("IRN", "IR", "Iran", &["Islamic Republic of Iran"]),
    ("IRQ", "IQ", "Iraq", &["Irak"]),
    ("IRL", "IE", "Ireland", &["Irlande", "Éire"]),
    ("IMN", "IM", "Isle of Man", &["Île de Man"]),
    ("ISR", "IL", "Israel", &["Israël"]),
    ("ITA", "IT", "Italy", &["Italie", "Italia"]),
    ("JAM", "JM", "Jamaica", &["Jamaïque"]),
    ("JPN", "JP", "Japan", &["Japon"]),
    ("JEY", "JE", "Jersey", &[]),
    ("JOR", "JO", "Jordan", &["Jordanie"]),
    ("KAZ", "KZ", "Kazakhstan", &[]),
    ("KEN", "KE", "Kenya", &[]),
    ("KIR", "KI", "Kiribati", &[]),
    ("PRK", "KP", "North Korea", &["Korea, Democratic People's Republic of", "Corée du Nord"]),
    ("KOR", "KR", "South Korea", &["Korea, Republic of", "Corée du Sud", "Korea"]),
    ("KWT", "KW", "Kuwait", &["Koweït"]),
    ("KGZ", "KG", "Kyrgyzstan", &["Kirghizistan"]),
    ("LAO", "LA", "Laos", &["Lao People's Democratic Republic"]),
    ("LVA", "LV", "Latvia", &["Lettonie"]),
    ("LBN", "LB", "Lebanon", &["Liban"]),
    ("LSO", "LS", "Lesotho", &[]),
    ("LBR", "LR", "Liberia", &["Libéria"]),
    ("LBY", "LY", "Libya", &["Libye"]),
    ("LIE", "LI", "Liechtenstein", &[]),
    ("LTU", "LT", "Lithuania", &["Lituanie"]),
    ("LUX", "LU", "Luxembourg", &[]),
    ("MAC", "MO", "Macao", &["Macau"]),
    ("MDG", "MG", "Madagascar", &[]),
    ("MWI", "MW", "Malawi", &[]),
    ("MYS", "MY", "Malaysia", &["Malaisie"]),
    ("MDV", "MV", "Maldives", &[]),
    ("MLI", "ML", "Mali", &[]),
    ("MLT", "MT", "Malta", &["Malte"]),
    ("MHL", "MH", "Marshall Islands", &[]),
    ("MTQ", "MQ", "Martinique", &[]),
    ("MRT", "MR", "Mauritania", &["Mauritanie"]),
    ("MUS", "MU", "Mauritius", &["Maurice"]),
    ("MYT", "YT", "Mayotte", &[]),
    ("MEX", "MX", "Mexico", &["Mexique", "México"]),
    ("FSM", "FM", "Micronesia", &["Federated States of Micronesia"]),
    ("MDA", "MD", "Moldova", &["Moldavie", "Republic of Moldova"]),
    ("MCO", "MC", "Monaco", &[]),
    ("MNG", "MN", "Mongolia", &["Mongolie"]),
    ("MNE", "ME", "Montenegro", &["Monténégro"]),
    ("MSR", "MS", "Montserrat", &[]),
    ("MAR", "MA", "Morocco", &["Maroc"]),
    ("MOZ", "MZ", "Mozambique", &[]),
    ("MMR", "MM", "Myanmar", &["Burma", "Birmanie"]),
    ("NAM", "NA", "Namibia", &["Namibie"]),
    ("NRU", "NR", "Nauru", &[]),
    ("NPL", "NP", "Nepal", &["Népal"]),
    ("NLD", "NL", "Netherlands", &["Pays-Bas", "Holland"]),
    ("NCL", "NC", "New Caledonia", &["Nouvelle-Calédonie"]),
    ("NZL", "NZ", "New Zealand", &["Nouvelle-Zélande"]),
    ("NIC", "NI", "Nicaragua", &[]),
    ("NER", "NE", "Niger", &[]),
    ("NGA", "NG", "Nigeria", &["Nigéria"]),
    ("NIU", "NU", "Niue", &[]),
    ("NFK", "NF", "Norfolk Island", &[]),
    ("MKD", "MK", "North Macedonia", &["Macedonia", "Macédoine du Nord"]),
    ("MNP", "MP", "Northern Mariana Islands", &[]),
    ("NOR", "NO", "Norway", &["Norvège"]),
    ("OMN", "OM", "Oman", &[]),
    ("PAK", "PK", "Pakistan", &[]),
    ("PLW", "PW", "Palau", &["Palaos"]),
    ("PSE", "PS", "Palestine", &["State of Palestine"]),
    ("PAN", "PA", "Panama", &[]),
    ("PNG", "PG", "Papua New Guinea", &["Papouasie-Nouvelle-Guinée"]),
    ("PRY", "PY", "Paraguay", &[]),
    ("PER", "PE", "Peru", &["Pérou"]),
    ("PHL", "PH", "Philippines", &[]),
    ("PCN", "PN", "Pitcairn", &["Pitcairn Islands"]),
    ("POL", "PL", "Poland", &["Pologne", "Polska"]),
    ("PRT", "PT", "Portugal", &[]),
    ("PRI", "PR", "Puerto Rico", &["Porto Rico"]),
    ("QAT", "QA", "Qatar", &[]),
    ("REU", "RE", "Réunion", &["La Réunion"]),
    ("ROU", "RO", "Romania", &["Roumanie"]),
    ("RUS", "RU", "Russia", &["Russian Federation", "Russie"]),
    ("RWA", "RW", "Rwanda", &[]),
    ("BLM", "BL", "Saint Barthélemy", &[]),
    ("SHN", "SH", "Saint Helena, Ascension and Tristan da Cunha", &["Saint Helena"]),
    ("KNA", "KN", "Saint Kitts and Nevis", &["Saint-Christophe-et-Niévès"]),
    ("LCA", "LC", "Saint Lucia", &["Sainte-Lucie"]),
    ("MAF", "MF", "Saint Martin", &["Saint-Martin"]),
    ("SPM", "PM", "Saint Pierre and Miquelon", &["Saint-Pierre-et-Miquelon"]),
    (
        "VCT",
        "VC",
        "Saint Vincent and the Grenadines",
        &["Saint-Vincent-et-les-Grenadines"],
    ),
    ("WSM", "WS", "Samoa", &[]),
    ("SMR", "SM", "San Marino", &["Saint-Marin"]),
    ("STP", "ST", "Sao Tome and Principe", &["São Tomé and Príncipe"]),
    ("SAU", "SA", "Saudi Arabia", &["Arabie saoudite"]),
    ("SEN", "SN", "Senegal", &["Sénégal"]),
    ("SRB", "RS", "Serbia", &["Serbie"]),
    ("SYC", "SC", "Seychelles", &[]),
    ("SLE", "SL", "Sierra Leone", &[]),
    ("SGP", "SG", "Singapore", &["Singapour"]),
    ("SXM", "SX", "Sint Maarten", &[]),
    ("SVK", "SK", "Slovakia", &["Slovaquie"]),
    ("SVN", "SI", "Slovenia", &["Slovénie"]),
    ("SLB", "SB", "Solomon Islands", &["Îles Salomon"]),
    ("SOM", "SO", "Somalia", &["Somalie"]),
    ("ZAF", "ZA", "South Africa", &["Afrique du Sud"]),
    ("SGS", "GS", "South Georgia and the South Sandwich Islands", &[]),
    ("SSD", "SS", "South Sudan", &["Soudan du Sud"]),
    ("ESP", "ES", "Spain", &["Espagne", "España"]),
    ("LKA", "LK", "Sri Lanka", &[]),
    ("SDN", "SD", "Sudan", &["Soudan"]),
    ("SUR", "SR", "Suriname", &[]),
    ("SJM", "SJ", "Svalbard and Jan Mayen", &[]),
    ("SWE", "SE", "Sweden", &["Suède", "Sverige"]),
    ("CHE", "CH", "Switzerland", &["Suisse", "Schweiz"]),
    ("SYR", "SY", "Syria", &["Syrian Arab Republic", "Syrie"]),
    ("TWN", "TW", "Taiwan", &["Taïwan"]),
    ("TJK", "TJ", "Tajikistan", &["Tadjikistan"]),
    ("TZA", "TZ", "Tanzania", &["United Republic of Tanzania", "Tanzanie"]),
    ("THA", "TH", "Thailand", &["Thaïlande"]),
    ("TLS", "TL", "Timor-Leste", &["East Timor"]),
    ("TGO", "TG", "Togo", &[]),
    ("TKL", "TK", "Tokelau", &[]),
    ("TON", "TO", "Tonga", &[]),
    ("TTO", "TT", "Trinidad and Tobago", &["Trinité-et-Tobago"]),
    ("TUN", "TN", "Tunisia", &["Tunisie"]),
    ("TUR", "TR", "Türkiye", &["Turkey", "Turquie"]),
    ("TKM", "TM", "Turkmenistan", &["Turkménistan"]),
    ("TCA", "TC", "Turks and Caicos Islands", &[]),
    ("TUV", "TV", "Tuvalu", &[]),
    ("UGA", "UG", "Uganda", &["Ouganda"]),
    ("UKR", "UA", "Ukraine", &[]),
    ("ARE", "AE", "United Arab Emirates", &["Émirats arabes unis", "UAE"]),
    (
        "GBR",
        "GB",
        "United Kingdom",
        &["Great Britain", "Royaume-Uni", "UK"],
    ),
    (
        "USA",
        "US",
        "United States",
        &["United States of America", "États-Unis", "U.S.A."],
    ),
    ("UMI", "UM", "United States Minor Outlying Islands", &[]),
    ("URY", "UY", "Uruguay", &[]),
    ("UZB", "UZ", "Uzbekistan", &["Ouzbékistan"]),
    ("VUT", "VU", "Vanuatu", &[]),
    ("VEN", "VE", "Venezuela", &[]),
    ("VNM", "VN", "Viet Nam", &["Vietnam"]),
    ("VGB", "VG", "British Virgin Islands", &["Virgin Islands, British"]),
    ("VIR", "VI", "U.S. Virgin Islands", &["Virgin Islands, U.S."]),
    ("WLF", "WF", "Wallis and Futuna", &["Wallis-et-Futuna"]),
    ("ESH", "EH", "Western Sahara", &["Sahara occidental"]),
    ("YEM", "YE", "Yemen", &["Yémen"]),
    ("ZMB", "ZM", "Zambia", &["Zambie"]),
    ("ZWE", "ZW", "Zimbabwe", &[]),
];
