//! ISO 3166-1 country codes, sorted by numeric code.

#[rustfmt::skip]
pub(crate) static ISO_3166: [(&str, &str, u16); 249] = [
    ("AF", "AFG", 4), ("AL", "ALB", 8), ("AQ", "ATA", 10), ("DZ", "DZA", 12),
    ("AS", "ASM", 16), ("AD", "AND", 20), ("AO", "AGO", 24), ("AG", "ATG", 28),
    ("AZ", "AZE", 31), ("AR", "ARG", 32), ("AU", "AUS", 36), ("AT", "AUT", 40),
    ("BS", "BHS", 44), ("BH", "BHR", 48), ("BD", "BGD", 50), ("AM", "ARM", 51),
    ("BB", "BRB", 52), ("BE", "BEL", 56), ("BM", "BMU", 60), ("BT", "BTN", 64),
    ("BO", "BOL", 68), ("BA", "BIH", 70), ("BW", "BWA", 72), ("BV", "BVT", 74),
    ("BR", "BRA", 76), ("BZ", "BLZ", 84), ("IO", "IOT", 86), ("SB", "SLB", 90),
    ("VG", "VGB", 92), ("BN", "BRN", 96), ("BG", "BGR", 100), ("MM", "MMR", 104),
    ("BI", "BDI", 108), ("BY", "BLR", 112), ("KH", "KHM", 116), ("CM", "CMR", 120),
    ("CA", "CAN", 124), ("CV", "CPV", 132), ("KY", "CYM", 136), ("CF", "CAF", 140),
    ("LK", "LKA", 144), ("TD", "TCD", 148), ("CL", "CHL", 152), ("CN", "CHN", 156),
    ("TW", "TWN", 158), ("CX", "CXR", 162), ("CC", "CCK", 166), ("CO", "COL", 170),
    ("KM", "COM", 174), ("YT", "MYT", 175), ("CG", "COG", 178), ("CD", "COD", 180),
    ("CK", "COK", 184), ("CR", "CRI", 188), ("HR", "HRV", 191), ("CU", "CUB", 192),
    ("CY", "CYP", 196), ("CZ", "CZE", 203), ("BJ", "BEN", 204), ("DK", "DNK", 208),
    ("DM", "DMA", 212), ("DO", "DOM", 214), ("EC", "ECU", 218), ("SV", "SLV", 222),
    ("GQ", "GNQ", 226), ("ET", "ETH", 231), ("ER", "ERI", 232), ("EE", "EST", 233),
    ("FO", "FRO", 234), ("FK", "FLK", 238), ("GS", "SGS", 239), ("FJ", "FJI", 242),
    ("FI", "FIN", 246), ("AX", "ALA", 248), ("FR", "FRA", 250), ("GF", "GUF", 254),
    ("PF", "PYF", 258), ("TF", "ATF", 260), ("DJ", "DJI", 262), ("GA", "GAB", 266),
    ("GE", "GEO", 268), ("GM", "GMB", 270), ("PS", "PSE", 275), ("DE", "DEU", 276),
    ("GH", "GHA", 288), ("GI", "GIB", 292), ("KI", "KIR", 296), ("GR", "GRC", 300),
    ("GL", "GRL", 304), ("GD", "GRD", 308), ("GP", "GLP", 312), ("GU", "GUM", 316),
    ("GT", "GTM", 320), ("GN", "GIN", 324), ("GY", "GUY", 328), ("HT", "HTI", 332),
    ("HM", "HMD", 334), ("VA", "VAT", 336), ("HN", "HND", 340), ("HK", "HKG", 344),
    ("HU", "HUN", 348), ("IS", "ISL", 352), ("IN", "IND", 356), ("ID", "IDN", 360),
    ("IR", "IRN", 364), ("IQ", "IRQ", 368), ("IE", "IRL", 372), ("IL", "ISR", 376),
    ("IT", "ITA", 380), ("CI", "CIV", 384), ("JM", "JAM", 388), ("JP", "JPN", 392),
    ("KZ", "KAZ", 398), ("JO", "JOR", 400), ("KE", "KEN", 404), ("KP", "PRK", 408),
    ("KR", "KOR", 410), ("KW", "KWT", 414), ("KG", "KGZ", 417), ("LA", "LAO", 418),
    ("LB", "LBN", 422), ("LS", "LSO", 426), ("LV", "LVA", 428), ("LR", "LBR", 430),
    ("LY", "LBY", 434), ("LI", "LIE", 438), ("LT", "LTU", 440), ("LU", "LUX", 442),
    ("MO", "MAC", 446), ("MG", "MDG", 450), ("MW", "MWI", 454), ("MY", "MYS", 458),
    ("MV", "MDV", 462), ("ML", "MLI", 466), ("MT", "MLT", 470), ("MQ", "MTQ", 474),
    ("MR", "MRT", 478), ("MU", "MUS", 480), ("MX", "MEX", 484), ("MC", "MCO", 492),
    ("MN", "MNG", 496), ("MD", "MDA", 498), ("ME", "MNE", 499), ("MS", "MSR", 500),
    ("MA", "MAR", 504), ("MZ", "MOZ", 508), ("OM", "OMN", 512), ("NA", "NAM", 516),
    ("NR", "NRU", 520), ("NP", "NPL", 524), ("NL", "NLD", 528), ("CW", "CUW", 531),
    ("AW", "ABW", 533), ("SX", "SXM", 534), ("BQ", "BES", 535), ("NC", "NCL", 540),
    ("VU", "VUT", 548), ("NZ", "NZL", 554), ("NI", "NIC", 558), ("NE", "NER", 562),
    ("NG", "NGA", 566), ("NU", "NIU", 570), ("NF", "NFK", 574), ("NO", "NOR", 578),
    ("MP", "MNP", 580), ("UM", "UMI", 581), ("FM", "FSM", 583), ("MH", "MHL", 584),
    ("PW", "PLW", 585), ("PK", "PAK", 586), ("PA", "PAN", 591), ("PG", "PNG", 598),
    ("PY", "PRY", 600), ("PE", "PER", 604), ("PH", "PHL", 608), ("PN", "PCN", 612),
    ("PL", "POL", 616), ("PT", "PRT", 620), ("GW", "GNB", 624), ("TL", "TLS", 626),
    ("PR", "PRI", 630), ("QA", "QAT", 634), ("RE", "REU", 638), ("RO", "ROU", 642),
    ("RU", "RUS", 643), ("RW", "RWA", 646), ("BL", "BLM", 652), ("SH", "SHN", 654),
    ("KN", "KNA", 659), ("AI", "AIA", 660), ("LC", "LCA", 662), ("MF", "MAF", 663),
    ("PM", "SPM", 666), ("VC", "VCT", 670), ("SM", "SMR", 674), ("ST", "STP", 678),
    ("SA", "SAU", 682), ("SN", "SEN", 686), ("RS", "SRB", 688), ("SC", "SYC", 690),
    ("SL", "SLE", 694), ("SG", "SGP", 702), ("SK", "SVK", 703), ("VN", "VNM", 704),
    ("SI", "SVN", 705), ("SO", "SOM", 706), ("ZA", "ZAF", 710), ("ZW", "ZWE", 716),
    ("ES", "ESP", 724), ("SS", "SSD", 728), ("SD", "SDN", 729), ("EH", "ESH", 732),
    ("SR", "SUR", 740), ("SJ", "SJM", 744), ("SZ", "SWZ", 748), ("SE", "SWE", 752),
    ("CH", "CHE", 756), ("SY", "SYR", 760), ("TJ", "TJK", 762), ("TH", "THA", 764),
    ("TG", "TGO", 768), ("TK", "TKL", 772), ("TO", "TON", 776), ("TT", "TTO", 780),
    ("AE", "ARE", 784), ("TN", "TUN", 788), ("TR", "TUR", 792), ("TM", "TKM", 795),
    ("TC", "TCA", 796), ("TV", "TUV", 798), ("UG", "UGA", 800), ("UA", "UKR", 804),
    ("MK", "MKD", 807), ("EG", "EGY", 818), ("GB", "GBR", 826), ("GG", "GGY", 831),
    ("JE", "JEY", 832), ("IM", "IMN", 833), ("TZ", "TZA", 834), ("US", "USA", 840),
    ("VI", "VIR", 850), ("BF", "BFA", 854), ("UY", "URY", 858), ("UZ", "UZB", 860),
    ("VE", "VEN", 862), ("WF", "WLF", 876), ("WS", "WSM", 882), ("YE", "YEM", 887),
    ("ZM", "ZMB", 894),
];
