//! The FontAwesome 4.7 icon set.
//!
//! Each row is `Variant => glyph, name, aliases...`.  The `Icon` enum and
//! the legacy code table are both generated from this one list.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

define_icons! {
    FiveHundredPx => "\u{f26e}", "500px";
    AddressBook => "\u{f2b9}", "address-book";
    AddressBookO => "\u{f2ba}", "address-book-o";
    AddressCard => "\u{f2bb}", "address-card", "vcard";
    AddressCardO => "\u{f2bc}", "address-card-o", "vcard-o";
    Adjust => "\u{f042}", "adjust";
    Adn => "\u{f170}", "adn";
    AlignCenter => "\u{f037}", "align-center";
    AlignJustify => "\u{f039}", "align-justify";
    AlignLeft => "\u{f036}", "align-left";
    AlignRight => "\u{f038}", "align-right";
    Amazon => "\u{f270}", "amazon";
    Ambulance => "\u{f0f9}", "ambulance";
    AmericanSignLanguageInterpreting => "\u{f2a3}", "american-sign-language-interpreting", "asl-interpreting";
    Anchor => "\u{f13d}", "anchor";
    Android => "\u{f17b}", "android";
    Angellist => "\u{f209}", "angellist";
    AngleDoubleDown => "\u{f103}", "angle-double-down";
    AngleDoubleLeft => "\u{f100}", "angle-double-left";
    AngleDoubleRight => "\u{f101}", "angle-double-right";
    AngleDoubleUp => "\u{f102}", "angle-double-up";
    AngleDown => "\u{f107}", "angle-down";
    AngleLeft => "\u{f104}", "angle-left";
    AngleRight => "\u{f105}", "angle-right";
    AngleUp => "\u{f106}", "angle-up";
    Apple => "\u{f179}", "apple";
    Archive => "\u{f187}", "archive";
    AreaChart => "\u{f1fe}", "area-chart";
    ArrowCircleDown => "\u{f0ab}", "arrow-circle-down";
    ArrowCircleLeft => "\u{f0a8}", "arrow-circle-left";
    ArrowCircleODown => "\u{f01a}", "arrow-circle-o-down";
    ArrowCircleOLeft => "\u{f190}", "arrow-circle-o-left";
    ArrowCircleORight => "\u{f18e}", "arrow-circle-o-right";
    ArrowCircleOUp => "\u{f01b}", "arrow-circle-o-up";
    ArrowCircleRight => "\u{f0a9}", "arrow-circle-right";
    ArrowCircleUp => "\u{f0aa}", "arrow-circle-up";
    ArrowDown => "\u{f063}", "arrow-down";
    ArrowLeft => "\u{f060}", "arrow-left";
    ArrowRight => "\u{f061}", "arrow-right";
    ArrowUp => "\u{f062}", "arrow-up";
    Arrows => "\u{f047}", "arrows";
    ArrowsAlt => "\u{f0b2}", "arrows-alt";
    ArrowsH => "\u{f07e}", "arrows-h";
    ArrowsV => "\u{f07d}", "arrows-v";
    AssistiveListeningSystems => "\u{f2a2}", "assistive-listening-systems";
    Asterisk => "\u{f069}", "asterisk";
    At => "\u{f1fa}", "at";
    AudioDescription => "\u{f29e}", "audio-description";
    Backward => "\u{f04a}", "backward";
    BalanceScale => "\u{f24e}", "balance-scale";
    Ban => "\u{f05e}", "ban";
    Bandcamp => "\u{f2d5}", "bandcamp";
    BarChart => "\u{f080}", "bar-chart", "bar-chart-o";
    Barcode => "\u{f02a}", "barcode";
    Bars => "\u{f0c9}", "bars", "navicon", "reorder";
    Bath => "\u{f2cd}", "bath", "bathtub", "s15";
    BatteryEmpty => "\u{f244}", "battery-empty", "battery-0";
    BatteryFull => "\u{f240}", "battery-full", "battery", "battery-4";
    BatteryHalf => "\u{f242}", "battery-half", "battery-2";
    BatteryQuarter => "\u{f243}", "battery-quarter", "battery-1";
    BatteryThreeQuarters => "\u{f241}", "battery-three-quarters", "battery-3";
    Bed => "\u{f236}", "bed", "hotel";
    Beer => "\u{f0fc}", "beer";
    Behance => "\u{f1b4}", "behance";
    BehanceSquare => "\u{f1b5}", "behance-square";
    Bell => "\u{f0f3}", "bell";
    BellO => "\u{f0a2}", "bell-o";
    BellSlash => "\u{f1f6}", "bell-slash";
    BellSlashO => "\u{f1f7}", "bell-slash-o";
    Bicycle => "\u{f206}", "bicycle";
    Binoculars => "\u{f1e5}", "binoculars";
    BirthdayCake => "\u{f1fd}", "birthday-cake";
    Bitbucket => "\u{f171}", "bitbucket";
    BitbucketSquare => "\u{f172}", "bitbucket-square";
    BlackTie => "\u{f27e}", "black-tie";
    Blind => "\u{f29d}", "blind";
    Bluetooth => "\u{f293}", "bluetooth";
    BluetoothB => "\u{f294}", "bluetooth-b";
    Bold => "\u{f032}", "bold";
    Bolt => "\u{f0e7}", "bolt", "flash";
    Bomb => "\u{f1e2}", "bomb";
    Book => "\u{f02d}", "book";
    Bookmark => "\u{f02e}", "bookmark";
    BookmarkO => "\u{f097}", "bookmark-o";
    Braille => "\u{f2a1}", "braille";
    Briefcase => "\u{f0b1}", "briefcase";
    Btc => "\u{f15a}", "btc", "bitcoin";
    Bug => "\u{f188}", "bug";
    Building => "\u{f1ad}", "building";
    BuildingO => "\u{f0f7}", "building-o";
    Bullhorn => "\u{f0a1}", "bullhorn";
    Bullseye => "\u{f140}", "bullseye";
    Bus => "\u{f207}", "bus";
    Buysellads => "\u{f20d}", "buysellads";
    Calculator => "\u{f1ec}", "calculator";
    Calendar => "\u{f073}", "calendar";
    CalendarCheckO => "\u{f274}", "calendar-check-o";
    CalendarMinusO => "\u{f272}", "calendar-minus-o";
    CalendarO => "\u{f133}", "calendar-o";
    CalendarPlusO => "\u{f271}", "calendar-plus-o";
    CalendarTimesO => "\u{f273}", "calendar-times-o";
    Camera => "\u{f030}", "camera";
    CameraRetro => "\u{f083}", "camera-retro";
    Car => "\u{f1b9}", "car", "automobile";
    CaretDown => "\u{f0d7}", "caret-down";
    CaretLeft => "\u{f0d9}", "caret-left";
    CaretRight => "\u{f0da}", "caret-right";
    CaretSquareODown => "\u{f150}", "caret-square-o-down", "toggle-down";
    CaretSquareOLeft => "\u{f191}", "caret-square-o-left", "toggle-left";
    CaretSquareORight => "\u{f152}", "caret-square-o-right", "toggle-right";
    CaretSquareOUp => "\u{f151}", "caret-square-o-up", "toggle-up";
    CaretUp => "\u{f0d8}", "caret-up";
    CartArrowDown => "\u{f218}", "cart-arrow-down";
    CartPlus => "\u{f217}", "cart-plus";
    Cc => "\u{f20a}", "cc";
    CcAmex => "\u{f1f3}", "cc-amex";
    CcDinersClub => "\u{f24c}", "cc-diners-club";
    CcDiscover => "\u{f1f2}", "cc-discover";
    CcJcb => "\u{f24b}", "cc-jcb";
    CcMastercard => "\u{f1f1}", "cc-mastercard";
    CcPaypal => "\u{f1f4}", "cc-paypal";
    CcStripe => "\u{f1f5}", "cc-stripe";
    CcVisa => "\u{f1f0}", "cc-visa";
    Certificate => "\u{f0a3}", "certificate";
    ChainBroken => "\u{f127}", "chain-broken", "unlink";
    Check => "\u{f00c}", "check";
    CheckCircle => "\u{f058}", "check-circle";
    CheckCircleO => "\u{f05d}", "check-circle-o";
    CheckSquare => "\u{f14a}", "check-square";
    CheckSquareO => "\u{f046}", "check-square-o";
    ChevronCircleDown => "\u{f13a}", "chevron-circle-down";
    ChevronCircleLeft => "\u{f137}", "chevron-circle-left";
    ChevronCircleRight => "\u{f138}", "chevron-circle-right";
    ChevronCircleUp => "\u{f139}", "chevron-circle-up";
    ChevronDown => "\u{f078}", "chevron-down";
    ChevronLeft => "\u{f053}", "chevron-left";
    ChevronRight => "\u{f054}", "chevron-right";
    ChevronUp => "\u{f077}", "chevron-up";
    Child => "\u{f1ae}", "child";
    Chrome => "\u{f268}", "chrome";
    Circle => "\u{f111}", "circle";
    CircleO => "\u{f10c}", "circle-o";
    CircleONotch => "\u{f1ce}", "circle-o-notch";
    CircleThin => "\u{f1db}", "circle-thin";
    Clipboard => "\u{f0ea}", "clipboard", "paste";
    ClockO => "\u{f017}", "clock-o";
    Clone => "\u{f24d}", "clone";
    Cloud => "\u{f0c2}", "cloud";
    CloudDownload => "\u{f0ed}", "cloud-download";
    CloudUpload => "\u{f0ee}", "cloud-upload";
    Code => "\u{f121}", "code";
    CodeFork => "\u{f126}", "code-fork";
    Codepen => "\u{f1cb}", "codepen";
    Codiepie => "\u{f284}", "codiepie";
    Coffee => "\u{f0f4}", "coffee";
    Cog => "\u{f013}", "cog", "gear";
    Cogs => "\u{f085}", "cogs", "gears";
    Columns => "\u{f0db}", "columns";
    Comment => "\u{f075}", "comment";
    CommentO => "\u{f0e5}", "comment-o";
    Commenting => "\u{f27a}", "commenting";
    CommentingO => "\u{f27b}", "commenting-o";
    Comments => "\u{f086}", "comments";
    CommentsO => "\u{f0e6}", "comments-o";
    Compass => "\u{f14e}", "compass";
    Compress => "\u{f066}", "compress";
    Connectdevelop => "\u{f20e}", "connectdevelop";
    Contao => "\u{f26d}", "contao";
    Copyright => "\u{f1f9}", "copyright";
    CreativeCommons => "\u{f25e}", "creative-commons";
    CreditCard => "\u{f09d}", "credit-card";
    CreditCardAlt => "\u{f283}", "credit-card-alt";
    Crop => "\u{f125}", "crop";
    Crosshairs => "\u{f05b}", "crosshairs";
    Css3 => "\u{f13c}", "css3";
    Cube => "\u{f1b2}", "cube";
    Cubes => "\u{f1b3}", "cubes";
    Cutlery => "\u{f0f5}", "cutlery";
    Dashcube => "\u{f210}", "dashcube";
    Database => "\u{f1c0}", "database";
    Deaf => "\u{f2a4}", "deaf", "deafness", "hard-of-hearing";
    Delicious => "\u{f1a5}", "delicious";
    Desktop => "\u{f108}", "desktop";
    Deviantart => "\u{f1bd}", "deviantart";
    Diamond => "\u{f219}", "diamond";
    Digg => "\u{f1a6}", "digg";
    DotCircleO => "\u{f192}", "dot-circle-o";
    Download => "\u{f019}", "download";
    Dribbble => "\u{f17d}", "dribbble";
    Dropbox => "\u{f16b}", "dropbox";
    Drupal => "\u{f1a9}", "drupal";
    Edge => "\u{f282}", "edge";
    Eercast => "\u{f2da}", "eercast";
    Eject => "\u{f052}", "eject";
    EllipsisH => "\u{f141}", "ellipsis-h";
    EllipsisV => "\u{f142}", "ellipsis-v";
    Empire => "\u{f1d1}", "empire", "ge";
    Envelope => "\u{f0e0}", "envelope";
    EnvelopeO => "\u{f003}", "envelope-o";
    EnvelopeOpen => "\u{f2b6}", "envelope-open";
    EnvelopeOpenO => "\u{f2b7}", "envelope-open-o";
    EnvelopeSquare => "\u{f199}", "envelope-square";
    Envira => "\u{f299}", "envira";
    Eraser => "\u{f12d}", "eraser";
    Etsy => "\u{f2d7}", "etsy";
    Eur => "\u{f153}", "eur", "euro";
    Exchange => "\u{f0ec}", "exchange";
    Exclamation => "\u{f12a}", "exclamation";
    ExclamationCircle => "\u{f06a}", "exclamation-circle";
    ExclamationTriangle => "\u{f071}", "exclamation-triangle", "warning";
    Expand => "\u{f065}", "expand";
    Expeditedssl => "\u{f23e}", "expeditedssl";
    ExternalLink => "\u{f08e}", "external-link";
    ExternalLinkSquare => "\u{f14c}", "external-link-square";
    Eye => "\u{f06e}", "eye";
    EyeSlash => "\u{f070}", "eye-slash";
    Eyedropper => "\u{f1fb}", "eyedropper";
    Facebook => "\u{f09a}", "facebook", "facebook-f";
    FacebookOfficial => "\u{f230}", "facebook-official";
    FacebookSquare => "\u{f082}", "facebook-square";
    FastBackward => "\u{f049}", "fast-backward";
    FastForward => "\u{f050}", "fast-forward";
    Fax => "\u{f1ac}", "fax";
    Female => "\u{f182}", "female";
    FighterJet => "\u{f0fb}", "fighter-jet";
    File => "\u{f15b}", "file";
    FileArchiveO => "\u{f1c6}", "file-archive-o", "file-zip-o";
    FileAudioO => "\u{f1c7}", "file-audio-o", "file-sound-o";
    FileCodeO => "\u{f1c9}", "file-code-o";
    FileExcelO => "\u{f1c3}", "file-excel-o";
    FileImageO => "\u{f1c5}", "file-image-o", "file-photo-o", "file-picture-o";
    FileO => "\u{f016}", "file-o";
    FilePdfO => "\u{f1c1}", "file-pdf-o";
    FilePowerpointO => "\u{f1c4}", "file-powerpoint-o";
    FileText => "\u{f15c}", "file-text";
    FileTextO => "\u{f0f6}", "file-text-o";
    FileVideoO => "\u{f1c8}", "file-video-o", "file-movie-o";
    FileWordO => "\u{f1c2}", "file-word-o";
    FilesO => "\u{f0c5}", "files-o", "copy";
    Film => "\u{f008}", "film";
    Filter => "\u{f0b0}", "filter";
    Fire => "\u{f06d}", "fire";
    FireExtinguisher => "\u{f134}", "fire-extinguisher";
    Firefox => "\u{f269}", "firefox";
    FirstOrder => "\u{f2b0}", "first-order";
    Flag => "\u{f024}", "flag";
    FlagCheckered => "\u{f11e}", "flag-checkered";
    FlagO => "\u{f11d}", "flag-o";
    Flask => "\u{f0c3}", "flask";
    Flickr => "\u{f16e}", "flickr";
    FloppyO => "\u{f0c7}", "floppy-o", "save";
    Folder => "\u{f07b}", "folder";
    FolderO => "\u{f114}", "folder-o";
    FolderOpen => "\u{f07c}", "folder-open";
    FolderOpenO => "\u{f115}", "folder-open-o";
    Font => "\u{f031}", "font";
    FontAwesome => "\u{f2b4}", "font-awesome", "fa";
    Fonticons => "\u{f280}", "fonticons";
    FortAwesome => "\u{f286}", "fort-awesome";
    Forumbee => "\u{f211}", "forumbee";
    Forward => "\u{f04e}", "forward";
    Foursquare => "\u{f180}", "foursquare";
    FreeCodeCamp => "\u{f2c5}", "free-code-camp";
    FrownO => "\u{f119}", "frown-o";
    FutbolO => "\u{f1e3}", "futbol-o", "soccer-ball-o";
    Gamepad => "\u{f11b}", "gamepad";
    Gavel => "\u{f0e3}", "gavel", "legal";
    Gbp => "\u{f154}", "gbp";
    Genderless => "\u{f22d}", "genderless";
    GetPocket => "\u{f265}", "get-pocket";
    Gg => "\u{f260}", "gg";
    GgCircle => "\u{f261}", "gg-circle";
    Gift => "\u{f06b}", "gift";
    Git => "\u{f1d3}", "git";
    GitSquare => "\u{f1d2}", "git-square";
    Github => "\u{f09b}", "github";
    GithubAlt => "\u{f113}", "github-alt";
    GithubSquare => "\u{f092}", "github-square";
    Gitlab => "\u{f296}", "gitlab";
    Glass => "\u{f000}", "glass";
    Glide => "\u{f2a5}", "glide";
    GlideG => "\u{f2a6}", "glide-g";
    Globe => "\u{f0ac}", "globe";
    Google => "\u{f1a0}", "google";
    GooglePlus => "\u{f0d5}", "google-plus";
    GooglePlusOfficial => "\u{f2b3}", "google-plus-official", "google-plus-circle";
    GooglePlusSquare => "\u{f0d4}", "google-plus-square";
    GoogleWallet => "\u{f1ee}", "google-wallet";
    GraduationCap => "\u{f19d}", "graduation-cap", "mortar-board";
    Gratipay => "\u{f184}", "gratipay", "gittip";
    Grav => "\u{f2d6}", "grav";
    HSquare => "\u{f0fd}", "h-square";
    HackerNews => "\u{f1d4}", "hacker-news", "y-combinator-square", "yc-square";
    HandLizardO => "\u{f258}", "hand-lizard-o";
    HandODown => "\u{f0a7}", "hand-o-down";
    HandOLeft => "\u{f0a5}", "hand-o-left";
    HandORight => "\u{f0a4}", "hand-o-right";
    HandOUp => "\u{f0a6}", "hand-o-up";
    HandPaperO => "\u{f256}", "hand-paper-o", "hand-stop-o";
    HandPeaceO => "\u{f25b}", "hand-peace-o";
    HandPointerO => "\u{f25a}", "hand-pointer-o";
    HandRockO => "\u{f255}", "hand-rock-o", "hand-grab-o";
    HandScissorsO => "\u{f257}", "hand-scissors-o";
    HandSpockO => "\u{f259}", "hand-spock-o";
    HandshakeO => "\u{f2b5}", "handshake-o";
    Hashtag => "\u{f292}", "hashtag";
    HddO => "\u{f0a0}", "hdd-o";
    Header => "\u{f1dc}", "header";
    Headphones => "\u{f025}", "headphones";
    Heart => "\u{f004}", "heart";
    HeartO => "\u{f08a}", "heart-o";
    Heartbeat => "\u{f21e}", "heartbeat";
    History => "\u{f1da}", "history";
    Home => "\u{f015}", "home";
    HospitalO => "\u{f0f8}", "hospital-o";
    Hourglass => "\u{f254}", "hourglass";
    HourglassEnd => "\u{f253}", "hourglass-end", "hourglass-3";
    HourglassHalf => "\u{f252}", "hourglass-half", "hourglass-2";
    HourglassO => "\u{f250}", "hourglass-o";
    HourglassStart => "\u{f251}", "hourglass-start", "hourglass-1";
    Houzz => "\u{f27c}", "houzz";
    Html5 => "\u{f13b}", "html5";
    ICursor => "\u{f246}", "i-cursor";
    IdBadge => "\u{f2c1}", "id-badge";
    IdCard => "\u{f2c2}", "id-card", "drivers-license";
    IdCardO => "\u{f2c3}", "id-card-o", "drivers-license-o";
    Ils => "\u{f20b}", "ils", "shekel", "sheqel";
    Imdb => "\u{f2d8}", "imdb";
    Inbox => "\u{f01c}", "inbox";
    Indent => "\u{f03c}", "indent";
    Industry => "\u{f275}", "industry";
    Info => "\u{f129}", "info";
    InfoCircle => "\u{f05a}", "info-circle";
    Inr => "\u{f156}", "inr", "rupee";
    Instagram => "\u{f16d}", "instagram";
    InternetExplorer => "\u{f26b}", "internet-explorer";
    Ioxhost => "\u{f208}", "ioxhost";
    Italic => "\u{f033}", "italic";
    Joomla => "\u{f1aa}", "joomla";
    Jpy => "\u{f157}", "jpy", "cny", "rmb", "yen";
    Jsfiddle => "\u{f1cc}", "jsfiddle";
    Key => "\u{f084}", "key";
    KeyboardO => "\u{f11c}", "keyboard-o";
    Krw => "\u{f159}", "krw", "won";
    Language => "\u{f1ab}", "language";
    Laptop => "\u{f109}", "laptop";
    Lastfm => "\u{f202}", "lastfm";
    LastfmSquare => "\u{f203}", "lastfm-square";
    Leaf => "\u{f06c}", "leaf";
    Leanpub => "\u{f212}", "leanpub";
    LemonO => "\u{f094}", "lemon-o";
    LevelDown => "\u{f149}", "level-down";
    LevelUp => "\u{f148}", "level-up";
    LifeRing => "\u{f1cd}", "life-ring", "life-bouy", "life-buoy", "life-saver", "support";
    LightbulbO => "\u{f0eb}", "lightbulb-o";
    LineChart => "\u{f201}", "line-chart";
    Link => "\u{f0c1}", "link", "chain";
    Linkedin => "\u{f0e1}", "linkedin";
    LinkedinSquare => "\u{f08c}", "linkedin-square";
    Linode => "\u{f2b8}", "linode";
    Linux => "\u{f17c}", "linux";
    List => "\u{f03a}", "list";
    ListAlt => "\u{f022}", "list-alt";
    ListOl => "\u{f0cb}", "list-ol";
    ListUl => "\u{f0ca}", "list-ul";
    LocationArrow => "\u{f124}", "location-arrow";
    Lock => "\u{f023}", "lock";
    LongArrowDown => "\u{f175}", "long-arrow-down";
    LongArrowLeft => "\u{f177}", "long-arrow-left";
    LongArrowRight => "\u{f178}", "long-arrow-right";
    LongArrowUp => "\u{f176}", "long-arrow-up";
    LowVision => "\u{f2a8}", "low-vision";
    Magic => "\u{f0d0}", "magic";
    Magnet => "\u{f076}", "magnet";
    Male => "\u{f183}", "male";
    Map => "\u{f279}", "map";
    MapMarker => "\u{f041}", "map-marker";
    MapO => "\u{f278}", "map-o";
    MapPin => "\u{f276}", "map-pin";
    MapSigns => "\u{f277}", "map-signs";
    Mars => "\u{f222}", "mars";
    MarsDouble => "\u{f227}", "mars-double";
    MarsStroke => "\u{f229}", "mars-stroke";
    MarsStrokeH => "\u{f22b}", "mars-stroke-h";
    MarsStrokeV => "\u{f22a}", "mars-stroke-v";
    Maxcdn => "\u{f136}", "maxcdn";
    Meanpath => "\u{f20c}", "meanpath";
    Medium => "\u{f23a}", "medium";
    Medkit => "\u{f0fa}", "medkit";
    Meetup => "\u{f2e0}", "meetup";
    MehO => "\u{f11a}", "meh-o";
    Mercury => "\u{f223}", "mercury";
    Microchip => "\u{f2db}", "microchip";
    Microphone => "\u{f130}", "microphone";
    MicrophoneSlash => "\u{f131}", "microphone-slash";
    Minus => "\u{f068}", "minus";
    MinusCircle => "\u{f056}", "minus-circle";
    MinusSquare => "\u{f146}", "minus-square";
    MinusSquareO => "\u{f147}", "minus-square-o";
    Mixcloud => "\u{f289}", "mixcloud";
    Mobile => "\u{f10b}", "mobile", "mobile-phone";
    Modx => "\u{f285}", "modx";
    Money => "\u{f0d6}", "money";
    MoonO => "\u{f186}", "moon-o";
    Motorcycle => "\u{f21c}", "motorcycle";
    MousePointer => "\u{f245}", "mouse-pointer";
    Music => "\u{f001}", "music";
    Neuter => "\u{f22c}", "neuter";
    NewspaperO => "\u{f1ea}", "newspaper-o";
    ObjectGroup => "\u{f247}", "object-group";
    ObjectUngroup => "\u{f248}", "object-ungroup";
    Odnoklassniki => "\u{f263}", "odnoklassniki";
    OdnoklassnikiSquare => "\u{f264}", "odnoklassniki-square";
    Opencart => "\u{f23d}", "opencart";
    Openid => "\u{f19b}", "openid";
    Opera => "\u{f26a}", "opera";
    OptinMonster => "\u{f23c}", "optin-monster";
    Outdent => "\u{f03b}", "outdent", "dedent";
    Pagelines => "\u{f18c}", "pagelines";
    PaintBrush => "\u{f1fc}", "paint-brush";
    PaperPlane => "\u{f1d8}", "paper-plane", "send";
    PaperPlaneO => "\u{f1d9}", "paper-plane-o", "send-o";
    Paperclip => "\u{f0c6}", "paperclip";
    Paragraph => "\u{f1dd}", "paragraph";
    Pause => "\u{f04c}", "pause";
    PauseCircle => "\u{f28b}", "pause-circle";
    PauseCircleO => "\u{f28c}", "pause-circle-o";
    Paw => "\u{f1b0}", "paw";
    Paypal => "\u{f1ed}", "paypal";
    Pencil => "\u{f040}", "pencil";
    PencilSquare => "\u{f14b}", "pencil-square";
    PencilSquareO => "\u{f044}", "pencil-square-o", "edit";
    Percent => "\u{f295}", "percent";
    Phone => "\u{f095}", "phone";
    PhoneSquare => "\u{f098}", "phone-square";
    PictureO => "\u{f03e}", "picture-o", "photo", "image";
    PieChart => "\u{f200}", "pie-chart";
    PiedPiper => "\u{f2ae}", "pied-piper";
    PiedPiperAlt => "\u{f1a8}", "pied-piper-alt";
    PiedPiperPp => "\u{f1a7}", "pied-piper-pp";
    Pinterest => "\u{f0d2}", "pinterest";
    PinterestP => "\u{f231}", "pinterest-p";
    PinterestSquare => "\u{f0d3}", "pinterest-square";
    Plane => "\u{f072}", "plane";
    Play => "\u{f04b}", "play";
    PlayCircle => "\u{f144}", "play-circle";
    PlayCircleO => "\u{f01d}", "play-circle-o";
    Plug => "\u{f1e6}", "plug";
    Plus => "\u{f067}", "plus";
    PlusCircle => "\u{f055}", "plus-circle";
    PlusSquare => "\u{f0fe}", "plus-square";
    PlusSquareO => "\u{f196}", "plus-square-o";
    Podcast => "\u{f2ce}", "podcast";
    PowerOff => "\u{f011}", "power-off";
    Print => "\u{f02f}", "print";
    ProductHunt => "\u{f288}", "product-hunt";
    PuzzlePiece => "\u{f12e}", "puzzle-piece";
    Qq => "\u{f1d6}", "qq";
    Qrcode => "\u{f029}", "qrcode";
    Question => "\u{f128}", "question";
    QuestionCircle => "\u{f059}", "question-circle";
    QuestionCircleO => "\u{f29c}", "question-circle-o";
    Quora => "\u{f2c4}", "quora";
    QuoteLeft => "\u{f10d}", "quote-left";
    QuoteRight => "\u{f10e}", "quote-right";
    Random => "\u{f074}", "random";
    Ravelry => "\u{f2d9}", "ravelry";
    Rebel => "\u{f1d0}", "rebel", "ra", "resistance";
    Recycle => "\u{f1b8}", "recycle";
    Reddit => "\u{f1a1}", "reddit";
    RedditAlien => "\u{f281}", "reddit-alien";
    RedditSquare => "\u{f1a2}", "reddit-square";
    Refresh => "\u{f021}", "refresh";
    Registered => "\u{f25d}", "registered";
    Renren => "\u{f18b}", "renren";
    Repeat => "\u{f01e}", "repeat", "rotate-right";
    Reply => "\u{f112}", "reply", "mail-reply";
    ReplyAll => "\u{f122}", "reply-all", "mail-reply-all";
    Retweet => "\u{f079}", "retweet";
    Road => "\u{f018}", "road";
    Rocket => "\u{f135}", "rocket";
    Rss => "\u{f09e}", "rss", "feed";
    RssSquare => "\u{f143}", "rss-square";
    Rub => "\u{f158}", "rub", "rouble", "ruble";
    Safari => "\u{f267}", "safari";
    Scissors => "\u{f0c4}", "scissors", "cut";
    Scribd => "\u{f28a}", "scribd";
    Search => "\u{f002}", "search";
    SearchMinus => "\u{f010}", "search-minus";
    SearchPlus => "\u{f00e}", "search-plus";
    Sellsy => "\u{f213}", "sellsy";
    Server => "\u{f233}", "server";
    Share => "\u{f064}", "share", "mail-forward";
    ShareAlt => "\u{f1e0}", "share-alt";
    ShareAltSquare => "\u{f1e1}", "share-alt-square";
    ShareSquare => "\u{f14d}", "share-square";
    ShareSquareO => "\u{f045}", "share-square-o";
    Shield => "\u{f132}", "shield";
    Ship => "\u{f21a}", "ship";
    Shirtsinbulk => "\u{f214}", "shirtsinbulk";
    ShoppingBag => "\u{f290}", "shopping-bag";
    ShoppingBasket => "\u{f291}", "shopping-basket";
    ShoppingCart => "\u{f07a}", "shopping-cart";
    Shower => "\u{f2cc}", "shower";
    SignIn => "\u{f090}", "sign-in";
    SignLanguage => "\u{f2a7}", "sign-language", "signing";
    SignOut => "\u{f08b}", "sign-out";
    Signal => "\u{f012}", "signal";
    Simplybuilt => "\u{f215}", "simplybuilt";
    Sitemap => "\u{f0e8}", "sitemap";
    Skyatlas => "\u{f216}", "skyatlas";
    Skype => "\u{f17e}", "skype";
    Slack => "\u{f198}", "slack";
    Sliders => "\u{f1de}", "sliders";
    Slideshare => "\u{f1e7}", "slideshare";
    SmileO => "\u{f118}", "smile-o";
    Snapchat => "\u{f2ab}", "snapchat";
    SnapchatGhost => "\u{f2ac}", "snapchat-ghost";
    SnapchatSquare => "\u{f2ad}", "snapchat-square";
    SnowflakeO => "\u{f2dc}", "snowflake-o";
    Sort => "\u{f0dc}", "sort", "unsorted";
    SortAlphaAsc => "\u{f15d}", "sort-alpha-asc";
    SortAlphaDesc => "\u{f15e}", "sort-alpha-desc";
    SortAmountAsc => "\u{f160}", "sort-amount-asc";
    SortAmountDesc => "\u{f161}", "sort-amount-desc";
    SortAsc => "\u{f0de}", "sort-asc", "sort-up";
    SortDesc => "\u{f0dd}", "sort-desc", "sort-down";
    SortNumericAsc => "\u{f162}", "sort-numeric-asc";
    SortNumericDesc => "\u{f163}", "sort-numeric-desc";
    Soundcloud => "\u{f1be}", "soundcloud";
    SpaceShuttle => "\u{f197}", "space-shuttle";
    Spinner => "\u{f110}", "spinner";
    Spoon => "\u{f1b1}", "spoon";
    Spotify => "\u{f1bc}", "spotify";
    Square => "\u{f0c8}", "square";
    SquareO => "\u{f096}", "square-o";
    StackExchange => "\u{f18d}", "stack-exchange";
    StackOverflow => "\u{f16c}", "stack-overflow";
    Star => "\u{f005}", "star";
    StarHalf => "\u{f089}", "star-half";
    StarHalfO => "\u{f123}", "star-half-o", "star-half-empty", "star-half-full";
    StarO => "\u{f006}", "star-o";
    Steam => "\u{f1b6}", "steam";
    SteamSquare => "\u{f1b7}", "steam-square";
    StepBackward => "\u{f048}", "step-backward";
    StepForward => "\u{f051}", "step-forward";
    Stethoscope => "\u{f0f1}", "stethoscope";
    StickyNote => "\u{f249}", "sticky-note";
    StickyNoteO => "\u{f24a}", "sticky-note-o";
    Stop => "\u{f04d}", "stop";
    StopCircle => "\u{f28d}", "stop-circle";
    StopCircleO => "\u{f28e}", "stop-circle-o";
    StreetView => "\u{f21d}", "street-view";
    Strikethrough => "\u{f0cc}", "strikethrough";
    Stumbleupon => "\u{f1a4}", "stumbleupon";
    StumbleuponCircle => "\u{f1a3}", "stumbleupon-circle";
    Subscript => "\u{f12c}", "subscript";
    Subway => "\u{f239}", "subway";
    Suitcase => "\u{f0f2}", "suitcase";
    SunO => "\u{f185}", "sun-o";
    Superpowers => "\u{f2dd}", "superpowers";
    Superscript => "\u{f12b}", "superscript";
    Table => "\u{f0ce}", "table";
    Tablet => "\u{f10a}", "tablet";
    Tachometer => "\u{f0e4}", "tachometer", "dashboard";
    Tag => "\u{f02b}", "tag";
    Tags => "\u{f02c}", "tags";
    Tasks => "\u{f0ae}", "tasks";
    Taxi => "\u{f1ba}", "taxi", "cab";
    Telegram => "\u{f2c6}", "telegram";
    Television => "\u{f26c}", "television", "tv";
    TencentWeibo => "\u{f1d5}", "tencent-weibo";
    Terminal => "\u{f120}", "terminal";
    TextHeight => "\u{f034}", "text-height";
    TextWidth => "\u{f035}", "text-width";
    Th => "\u{f00a}", "th";
    ThLarge => "\u{f009}", "th-large";
    ThList => "\u{f00b}", "th-list";
    Themeisle => "\u{f2b2}", "themeisle";
    ThermometerEmpty => "\u{f2cb}", "thermometer-empty", "thermometer-0";
    ThermometerFull => "\u{f2c7}", "thermometer-full", "thermometer", "thermometer-4";
    ThermometerHalf => "\u{f2c9}", "thermometer-half", "thermometer-2";
    ThermometerQuarter => "\u{f2ca}", "thermometer-quarter", "thermometer-1";
    ThermometerThreeQuarters => "\u{f2c8}", "thermometer-three-quarters", "thermometer-3";
    ThumbTack => "\u{f08d}", "thumb-tack";
    ThumbsDown => "\u{f165}", "thumbs-down";
    ThumbsODown => "\u{f088}", "thumbs-o-down";
    ThumbsOUp => "\u{f087}", "thumbs-o-up";
    ThumbsUp => "\u{f164}", "thumbs-up";
    Ticket => "\u{f145}", "ticket";
    Times => "\u{f00d}", "times", "remove", "close";
    TimesCircle => "\u{f057}", "times-circle";
    TimesCircleO => "\u{f05c}", "times-circle-o";
    Tint => "\u{f043}", "tint";
    ToggleOff => "\u{f204}", "toggle-off";
    ToggleOn => "\u{f205}", "toggle-on";
    Trademark => "\u{f25c}", "trademark";
    Train => "\u{f238}", "train";
    Transgender => "\u{f224}", "transgender", "intersex";
    TransgenderAlt => "\u{f225}", "transgender-alt";
    Trash => "\u{f1f8}", "trash";
    TrashO => "\u{f014}", "trash-o";
    Tree => "\u{f1bb}", "tree";
    Trello => "\u{f181}", "trello";
    Tripadvisor => "\u{f262}", "tripadvisor";
    Trophy => "\u{f091}", "trophy";
    Truck => "\u{f0d1}", "truck";
    Try => "\u{f195}", "try", "turkish-lira";
    Tty => "\u{f1e4}", "tty";
    Tumblr => "\u{f173}", "tumblr";
    TumblrSquare => "\u{f174}", "tumblr-square";
    Twitch => "\u{f1e8}", "twitch";
    Twitter => "\u{f099}", "twitter";
    TwitterSquare => "\u{f081}", "twitter-square";
    Umbrella => "\u{f0e9}", "umbrella";
    Underline => "\u{f0cd}", "underline";
    Undo => "\u{f0e2}", "undo", "rotate-left";
    UniversalAccess => "\u{f29a}", "universal-access";
    University => "\u{f19c}", "university", "institution", "bank";
    Unlock => "\u{f09c}", "unlock";
    UnlockAlt => "\u{f13e}", "unlock-alt";
    Upload => "\u{f093}", "upload";
    Usb => "\u{f287}", "usb";
    Usd => "\u{f155}", "usd", "dollar";
    User => "\u{f007}", "user";
    UserCircle => "\u{f2bd}", "user-circle";
    UserCircleO => "\u{f2be}", "user-circle-o";
    UserMd => "\u{f0f0}", "user-md";
    UserO => "\u{f2c0}", "user-o";
    UserPlus => "\u{f234}", "user-plus";
    UserSecret => "\u{f21b}", "user-secret";
    UserTimes => "\u{f235}", "user-times";
    Users => "\u{f0c0}", "users", "group";
    Venus => "\u{f221}", "venus";
    VenusDouble => "\u{f226}", "venus-double";
    VenusMars => "\u{f228}", "venus-mars";
    Viacoin => "\u{f237}", "viacoin";
    Viadeo => "\u{f2a9}", "viadeo";
    ViadeoSquare => "\u{f2aa}", "viadeo-square";
    VideoCamera => "\u{f03d}", "video-camera";
    Vimeo => "\u{f27d}", "vimeo";
    VimeoSquare => "\u{f194}", "vimeo-square";
    Vine => "\u{f1ca}", "vine";
    Vk => "\u{f189}", "vk";
    VolumeControlPhone => "\u{f2a0}", "volume-control-phone";
    VolumeDown => "\u{f027}", "volume-down";
    VolumeOff => "\u{f026}", "volume-off";
    VolumeUp => "\u{f028}", "volume-up";
    Weibo => "\u{f18a}", "weibo";
    Weixin => "\u{f1d7}", "weixin", "wechat";
    Whatsapp => "\u{f232}", "whatsapp";
    Wheelchair => "\u{f193}", "wheelchair";
    WheelchairAlt => "\u{f29b}", "wheelchair-alt";
    Wifi => "\u{f1eb}", "wifi";
    WikipediaW => "\u{f266}", "wikipedia-w";
    WindowClose => "\u{f2d3}", "window-close", "times-rectangle";
    WindowCloseO => "\u{f2d4}", "window-close-o", "times-rectangle-o";
    WindowMaximize => "\u{f2d0}", "window-maximize";
    WindowMinimize => "\u{f2d1}", "window-minimize";
    WindowRestore => "\u{f2d2}", "window-restore";
    Windows => "\u{f17a}", "windows";
    Wordpress => "\u{f19a}", "wordpress";
    Wpbeginner => "\u{f297}", "wpbeginner";
    Wpexplorer => "\u{f2de}", "wpexplorer";
    Wpforms => "\u{f298}", "wpforms";
    Wrench => "\u{f0ad}", "wrench";
    Xing => "\u{f168}", "xing";
    XingSquare => "\u{f169}", "xing-square";
    YCombinator => "\u{f23b}", "y-combinator", "yc";
    Yahoo => "\u{f19e}", "yahoo";
    Yelp => "\u{f1e9}", "yelp";
    Yoast => "\u{f2b1}", "yoast";
    Youtube => "\u{f167}", "youtube";
    YoutubePlay => "\u{f16a}", "youtube-play";
    YoutubeSquare => "\u{f166}", "youtube-square";
}

//===========================================================================//
