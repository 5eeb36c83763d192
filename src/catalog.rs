//! The movement catalog: every piece kind with its abbreviation, name, promotion and moves.
//!
//! The whole table is one declarative list. Each row reads
//! `Identity, "ABBR", "Display Name" => PromotesTo, profile;` where the promotion part is
//! optional. Directions are named from the owner's point of view.

use std::fmt;

use crate::core::direction::{Direction, DirectionSet};
use crate::options::GameOptions;
use crate::profile::{HookMove, MovementProfile, UNLIMITED};

const E: MovementProfile = MovementProfile::EMPTY;

const F: DirectionSet = DirectionSet::of(&[Direction::Up]);
const B: DirectionSet = DirectionSet::of(&[Direction::Down]);
const L: DirectionSet = DirectionSet::of(&[Direction::Left]);
const R: DirectionSet = DirectionSet::of(&[Direction::Right]);
const FL: DirectionSet = DirectionSet::of(&[Direction::UpLeft]);
const FR: DirectionSet = DirectionSet::of(&[Direction::UpRight]);
const BL: DirectionSet = DirectionSet::of(&[Direction::DownLeft]);
const BR: DirectionSet = DirectionSet::of(&[Direction::DownRight]);

const SIDE: DirectionSet = L.or(R);
const VERT: DirectionSet = F.or(B);
const ORTHO: DirectionSet = SIDE.or(VERT);
const FDIAG: DirectionSet = FL.or(FR);
const BDIAG: DirectionSet = BL.or(BR);
const DIAG: DirectionSet = FDIAG.or(BDIAG);
const ALL: DirectionSet = ORTHO.or(DIAG);
const FRONT: DirectionSet = F.or(FDIAG);
const BACK: DirectionSet = B.or(BDIAG);
const KNIGHT_FORWARD: DirectionSet =
    DirectionSet::of(&[Direction::KnightUpLeft, Direction::KnightUpRight]);
const KNIGHT_BACKWARD: DirectionSet =
    DirectionSet::of(&[Direction::KnightDownLeft, Direction::KnightDownRight]);
const KNIGHTS: DirectionSet = DirectionSet::of(&[
    Direction::KnightUpRight,
    Direction::KnightRightUp,
    Direction::KnightRightDown,
    Direction::KnightDownRight,
    Direction::KnightDownLeft,
    Direction::KnightLeftDown,
    Direction::KnightLeftUp,
    Direction::KnightUpLeft,
]);

const GOLD: MovementProfile = E.step(ORTHO.or(FDIAG), 1);
const SILVER: MovementProfile = E.step(DIAG.or(F), 1);
const KING: MovementProfile = E.step(ALL, 1);
const LION: MovementProfile = E.step(ALL, 1).jump(ALL, &[2]).jump(KNIGHTS, &[1]).area();

const TREACHEROUS_FOX: MovementProfile = E.step(VERT.or(DIAG), 1).jump(VERT.or(DIAG), &[2, 3]);
const TREACHEROUS_FOX_ALT: MovementProfile = E.step(VERT.or(DIAG), 1).jump(VERT.or(DIAG), &[2]).area();
const HEAVENLY_TETRARCH: MovementProfile = E
    .jump_then(ALL.minus(SIDE), &[2], UNLIMITED)
    .step(SIDE, 4)
    .igui(ALL);
const HEAVENLY_TETRARCH_ALT: MovementProfile = E.jump_then(ALL, &[2], UNLIMITED);
const WOODEN_DOVE: MovementProfile = E.step(ORTHO, 2).jump_then(DIAG, &[3], 2);
const WOODEN_DOVE_ALT: MovementProfile = E.step(ORTHO, 2).step(DIAG, 5);

/// One row of the catalog.
#[derive(Debug)]
pub struct CatalogEntry {
    pub identity: PieceIdentity,
    pub abbreviation: &'static str,
    pub name: &'static str,
    pub promotes_to: Option<PieceIdentity>,
    pub profile: MovementProfile,
}

macro_rules! piece_catalog {
    (@promo) => { None };
    (@promo $promo:ident) => { Some(PieceIdentity::$promo) };
    ($($variant:ident, $abbr:literal, $name:literal $(=> $promo:ident)?, $profile:expr;)*) => {
        /// Every kind of piece in the game.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PieceIdentity {
            $($variant,)*
        }

        impl PieceIdentity {
            /// All identities in catalog order.
            pub const ALL: &'static [PieceIdentity] = &[$(PieceIdentity::$variant,)*];

            /// Number of identities.
            pub const COUNT: usize = PieceIdentity::ALL.len();

            /// Returns the identifier used in persisted documents, e.g. `"DrunkElephant"`.
            pub fn id(self) -> &'static str {
                match self {
                    $(PieceIdentity::$variant => stringify!($variant),)*
                }
            }

            /// Parses the identifier produced by [`PieceIdentity::id`].
            pub fn from_id(s: &str) -> Option<PieceIdentity> {
                match s {
                    $(stringify!($variant) => Some(PieceIdentity::$variant),)*
                    _ => None,
                }
            }
        }

        static CATALOG: &[CatalogEntry] = &[
            $(CatalogEntry {
                identity: PieceIdentity::$variant,
                abbreviation: $abbr,
                name: $name,
                promotes_to: piece_catalog!(@promo $($promo)?),
                profile: $profile,
            },)*
        ];
    };
}

piece_catalog! {
    King, "K", "King", E.step(ALL, 2);
    CrownPrince, "CP", "Crown Prince", E.step(ALL, 2);
    DrunkElephant, "DE", "Drunk Elephant" => CrownPrince, E.step(ALL.minus(B), 1);
    GoldGeneral, "G", "Gold General" => Rook, GOLD;
    SilverGeneral, "S", "Silver General" => VerticalMover, SILVER;
    CopperGeneral, "C", "Copper General" => SideMover, E.step(FRONT.or(B), 1);
    IronGeneral, "I", "Iron General" => VerticalSoldier, E.step(FRONT, 1);
    TileGeneral, "TG", "Tile General" => WesternBarbarian, E.step(FDIAG.or(B), 1);
    StoneGeneral, "SG", "Stone General" => WhiteElephant, E.step(FDIAG, 1);
    EarthGeneral, "EG", "Earth General" => WoodenDove, E.step(VERT, 1);
    WoodGeneral, "WG", "Wood General" => WhiteElephant, E.step(FDIAG, 2);
    BlindTiger, "BT", "Blind Tiger" => FlyingStag, E.step(ALL.minus(F), 1);
    FerociousLeopard, "FL", "Ferocious Leopard" => Bishop, E.step(ALL.minus(SIDE), 1);
    Pawn, "P", "Pawn" => Tokin, E.step(F, 1);
    Tokin, "TK", "Tokin", GOLD;
    GoBetween, "GB", "Go Between" => DrunkElephant, E.step(VERT, 1);
    Dog, "D", "Dog" => MultiGeneral, E.step(F.or(BDIAG), 1);
    MultiGeneral, "MG", "Multi General", E.slide(F.or(BDIAG));
    Lance, "L", "Lance" => WhiteHorse, E.slide(F);
    ReverseChariot, "RV", "Reverse Chariot" => Whale, E.slide(VERT);
    Knight, "N", "Knight" => SideSoldier, E.jump(KNIGHT_FORWARD, &[1]);
    Rook, "R", "Rook" => DragonKing, E.slide(ORTHO);
    Bishop, "B", "Bishop" => DragonHorse, E.slide(DIAG);
    DragonKing, "DK", "Dragon King" => SoaringEagle, E.slide(ORTHO).step(DIAG, 1);
    DragonHorse, "DH", "Dragon Horse" => HornedFalcon, E.slide(DIAG).step(ORTHO, 1);
    SoaringEagle, "SE", "Soaring Eagle",
        E.slide(ALL.minus(FDIAG)).step(FDIAG, 2).jump(FDIAG, &[2]).igui(FDIAG);
    HornedFalcon, "HF", "Horned Falcon",
        E.slide(ALL.minus(F)).step(F, 2).jump(F, &[2]).igui(F);
    Lion, "LN", "Lion" => FuriousFiend, LION;
    FuriousFiend, "FF", "Furious Fiend", LION.step(ALL, 3);
    Kirin, "KR", "Kirin" => GreatDragon, E.step(DIAG, 1).jump(ORTHO, &[2]);
    Phoenix, "PH", "Phoenix" => GoldenBird, E.step(ORTHO, 1).jump(DIAG, &[2]);
    GreatDragon, "GD", "Great Dragon", E.slide(DIAG).jump_then(ORTHO, &[3], UNLIMITED);
    GoldenBird, "GBI", "Golden Bird", E.slide(ORTHO).jump_then(DIAG, &[3], UNLIMITED);
    Queen, "Q", "Queen" => FreeEagle, E.slide(ALL);
    FreeEagle, "FE", "Free Eagle", E.slide(ALL).jump(ALL, &[2]).igui(DIAG);
    LionDog, "LD", "Lion Dog", E.step(ALL, 3).jump(ALL, &[2, 3]).area();
    FlyingStag, "FS", "Flying Stag", E.slide(VERT).step(ALL, 1);
    WhiteHorse, "WH", "White Horse", E.slide(VERT.or(FDIAG));
    Whale, "WL", "Whale", E.slide(VERT.or(BDIAG));
    VerticalMover, "VM", "Vertical Mover", E.slide(VERT).step(SIDE, 1);
    SideMover, "SM", "Side Mover", E.slide(SIDE).step(VERT, 1);
    WhiteElephant, "WE", "White Elephant", E.step(ALL, 2);
    FreeKing, "FK", "Free King", E.slide(ALL);
    WoodenDove, "WD", "Wooden Dove", WOODEN_DOVE;
    TreacherousFox, "TF", "Treacherous Fox", TREACHEROUS_FOX;
    HeavenlyTetrarch, "HT", "Heavenly Tetrarch", HEAVENLY_TETRARCH;

    HookMover, "HM", "Hook Mover", E.slide(ORTHO).hook(HookMove::Orthogonal);
    Capricorn, "CA", "Capricorn", E.slide(DIAG).hook(HookMove::Diagonal);
    Peacock, "PK", "Peacock", E.slide(FDIAG).step(BDIAG, 2).hook(HookMove::ForwardDiagonal);
    LongNosedGoblin, "LNG", "Long-Nosed Goblin",
        E.slide(DIAG).step(ORTHO, 1).hook(HookMove::Diagonal);
    MountainWitch, "MW", "Mountain Witch", E.slide(VERT.or(BDIAG)).step(FDIAG, 1);

    GreatGeneral, "GG", "Great General", E.slide(ALL).range_capture(ALL);
    ViceGeneral, "VG", "Vice General", E.slide(DIAG).range_capture(DIAG).step(ORTHO, 1).area();
    RookGeneral, "RKG", "Rook General" => FlyingCrocodile, E.slide(ORTHO).range_capture(ORTHO);
    BishopGeneral, "BSG", "Bishop General" => ViolentDragon, E.slide(DIAG).range_capture(DIAG);
    FlyingCrocodile, "FCR", "Flying Crocodile", E.slide(ORTHO.or(BDIAG)).step(FDIAG, 3);
    ViolentDragon, "VD", "Violent Dragon", E.slide(DIAG).step(ORTHO, 2);
    LeftGeneral, "LGE", "Left General" => LeftArmy, E.step(ALL.minus(L), 1);
    RightGeneral, "RGE", "Right General" => RightArmy, E.step(ALL.minus(R), 1);
    LeftArmy, "LAR", "Left Army", E.slide(L.or(FL).or(BL)).step(ALL.minus(L.or(FL).or(BL)), 1);
    RightArmy, "RAR", "Right Army", E.slide(R.or(FR).or(BR)).step(ALL.minus(R.or(FR).or(BR)), 1);

    RunningTiger, "RTI", "Running Tiger" => FreeTiger, E.slide(VERT).step(SIDE, 1);
    RunningBear, "RBE", "Running Bear" => FreeBear, E.slide(FDIAG).step(SIDE.or(B), 1);
    RunningHorse, "RH", "Running Horse" => FreeDemon, E.slide(F).step(BDIAG, 1).jump(B, &[2]);
    RunningWolf, "RW", "Running Wolf" => FreeWolf, E.slide(F.or(SIDE)).step(FDIAG, 1);
    RunningStag, "RST", "Running Stag" => FreeStag, E.slide(SIDE.or(BDIAG)).step(F, 2);
    RunningRabbit, "RR", "Running Rabbit" => TreacherousFox, E.slide(F).step(ALL.minus(F), 1);
    RunningPup, "RP", "Running Pup" => FreeLeopard, E.slide(F).step(B, 1);
    RunningSerpent, "RS", "Running Serpent" => FreeSerpent, E.slide(VERT).step(FDIAG, 1);
    RunningChariot, "RCH", "Running Chariot" => BurningChariot,
        E.slide(VERT).step(SIDE.or(FDIAG), 1);
    RunningDragon, "RD", "Running Dragon" => FireDragon, E.slide(FRONT.or(BDIAG)).step(B, 5);

    FreeTiger, "FTI", "Free Tiger", E.slide(ALL.minus(F));
    FreeBear, "FBE", "Free Bear", E.slide(VERT.or(DIAG)).jump(FDIAG, &[2]);
    FreeDemon, "FDE", "Free Demon", E.slide(SIDE.or(DIAG)).step(VERT, 5);
    FreeWolf, "FWO", "Free Wolf", E.slide(ALL.minus(B));
    FreeStag, "FST", "Free Stag", E.slide(ALL);
    FreeLeopard, "FLE", "Free Leopard", E.slide(VERT.or(DIAG));
    FreeSerpent, "FSE", "Free Serpent", E.slide(VERT.or(BDIAG));
    FreeBoar, "FBO", "Free Boar", E.slide(SIDE.or(DIAG));
    FreePup, "FPU", "Free Pup", E.slide(ALL.minus(BDIAG));
    FreeDreamEater, "FDR", "Free Dream-Eater", E.slide(ALL).jump_then(ORTHO, &[5], UNLIMITED);
    FreeBird, "FBI", "Free Bird", E.slide(ORTHO.or(FDIAG)).jump(BDIAG, &[3]);
    FreeFire, "FFI", "Free Fire", E.slide(ALL.minus(SIDE)).step(SIDE, 5);
    FreeDragon, "FDG", "Free Dragon", E.slide(ALL.minus(F)).step(F, 3);

    SideBoar, "SBO", "Side Boar" => FreeBoar, E.slide(SIDE).step(VERT.or(DIAG), 1);
    SideDragon, "SD", "Side Dragon" => RunningDragon, E.slide(SIDE.or(F));
    SideFlier, "SF", "Side Flier" => FreeBird, E.slide(SIDE).step(DIAG, 1);
    SideMonkey, "SMK", "Side Monkey" => SideSoldier, E.slide(SIDE).step(FDIAG.or(B), 1);
    SideOx, "SOX", "Side Ox" => FlyingOx, E.slide(SIDE.or(FR).or(BL));
    SideSerpent, "SSP", "Side Serpent" => ShearingDragon, E.slide(SIDE.or(B)).step(F, 3);
    SideWolf, "SWO", "Side Wolf" => FreeWolf, E.slide(SIDE).step(FL.or(BR), 1);
    SideSoldier, "SSO", "Side Soldier" => WaterBuffalo, E.slide(SIDE).step(F, 2).step(B, 1);

    VerticalBear, "VBE", "Vertical Bear" => FreeBear, E.slide(F).step(SIDE.or(B), 1);
    VerticalHorse, "VHO", "Vertical Horse" => DragonHorse, E.slide(F).step(FDIAG.or(B), 1);
    VerticalLeopard, "VLE", "Vertical Leopard" => GreatLeopard,
        E.slide(F).step(FDIAG.or(SIDE).or(B), 1);
    VerticalPup, "VPU", "Vertical Pup" => LeopardKing, E.slide(B).step(FRONT, 1);
    VerticalTiger, "VTI", "Vertical Tiger" => FlyingTiger, E.slide(F).step(B, 2);
    VerticalWolf, "VWO", "Vertical Wolf" => RunningWolf, E.slide(F).step(SIDE, 1).step(B, 3);
    VerticalSoldier, "VSO", "Vertical Soldier" => ChariotSoldier,
        E.slide(F).step(SIDE, 2).step(B, 1);

    ChariotSoldier, "CHS", "Chariot Soldier" => HeavenlyTetrarch,
        E.slide(VERT.or(DIAG)).step(SIDE, 2);
    WaterBuffalo, "WBF", "Water Buffalo", E.slide(SIDE.or(DIAG)).step(VERT, 2);
    SwordSoldier, "SWS", "Sword Soldier" => SwordGeneral, E.step(FDIAG.or(B), 1);
    SpearSoldier, "SPS", "Spear Soldier" => SpearGeneral, E.slide(F).step(SIDE.or(B), 1);
    BowSoldier, "BWS", "Bow Soldier" => BowGeneral, E.step(F, 5).step(FDIAG, 1).step(SIDE, 2);
    CrossbowSoldier, "CBS", "Crossbow Soldier" => CrossbowGeneral,
        E.step(F, 5).step(FDIAG.or(SIDE), 3).step(B, 1);
    HorseSoldier, "HSO", "Horse Soldier" => HorseGeneral, E.slide(F).step(FDIAG, 3).step(B, 2);
    OxSoldier, "OSO", "Ox Soldier" => OxGeneral, E.slide(F).step(FDIAG, 5).step(B, 2);
    LeopardSoldier, "LSO", "Leopard Soldier" => FreeLeopard,
        E.slide(F).step(FDIAG.or(SIDE), 2).step(B, 2);
    BearSoldier, "BRS", "Bear Soldier" => StrongBear, E.slide(F).step(FDIAG, 2).step(SIDE.or(B), 1);
    BurningSoldier, "BS", "Burning Soldier" => BurningGeneral,
        E.step(F, 7).step(FDIAG, 5).step(SIDE, 3).step(B, 1);
    SwordGeneral, "SWG", "Sword General", E.step(F, 3).step(FDIAG.or(B), 1);
    SpearGeneral, "SPG", "Spear General", E.slide(F).step(SIDE, 1).step(B, 2);
    BowGeneral, "BWG", "Bow General", E.step(FRONT.or(SIDE), 1).jump(F, &[2]);
    CrossbowGeneral, "CBG", "Crossbow General", E.slide(F).step(FDIAG, 1).jump(FDIAG, &[3]);
    HorseGeneral, "HG", "Horse General" => FreeLeopard, E.step(F, 3).step(FDIAG.or(B), 1);
    OxGeneral, "OG", "Ox General" => FlyingOx, E.step(FRONT, 3).step(B, 1);
    BurningGeneral, "BGE", "Burning General", E.step(F, 3).step(ALL.minus(F), 1);
    PigGeneral, "PGN", "Pig General" => FreeBoar, E.step(FDIAG, 2).step(B, 1);
    ChickenGeneral, "CKG", "Chicken General" => FlyingCock, E.step(F, 4).step(BDIAG, 1);

    StrongBear, "SB", "Strong Bear", E.slide(FDIAG).step(SIDE.or(B), 2);
    StrongChariot, "SCR", "Strong Chariot", E.slide(ORTHO.or(FDIAG));
    StrongEagle, "SEA", "Strong Eagle", E.slide(ALL).jump(VERT, &[2]);

    LeftMountainEagle, "LME", "Left Mountain Eagle" => SoaringEagle,
        E.slide(ORTHO.or(FR).or(BDIAG)).step(FL, 2).jump(FL, &[2]);
    RightMountainEagle, "RME", "Right Mountain Eagle" => SoaringEagle,
        E.slide(ORTHO.or(FL).or(BDIAG)).step(FR, 2).jump(FR, &[2]);
    MountainFalcon, "MFA", "Mountain Falcon" => HornedFalcon,
        E.slide(ALL.minus(F)).step(F, 2).jump(F, &[2]);
    MountainStag, "MST", "Mountain Stag" => GreatStag,
        E.step(F, 1).step(FDIAG, 3).step(SIDE, 2).step(B, 4);
    MountainCrane, "MCR", "Mountain Crane", E.slide(ALL).jump(ALL, &[3]);
    MountainGeneral, "MGN", "Mountain General" => PeacefulMountain,
        E.step(FRONT, 3).step(B, 1);
    PeacefulMountain, "PMO", "Peaceful Mountain", E.slide(FRONT).step(SIDE, 5);
    MountainDove, "MDO", "Mountain Dove" => GreatDove,
        E.step(F.or(SIDE), 1).step(FDIAG, 5).step(B, 2);

    FlyingOx, "FOX", "Flying Ox", E.slide(VERT.or(DIAG));
    FlyingSwallow, "FSW", "Flying Swallow" => Rook, E.step(FDIAG, 1).slide(B);
    FlyingGoose, "FGO", "Flying Goose" => SwallowsWings, E.step(VERT.or(FDIAG), 1);
    SwallowsWings, "SWW", "Swallow's Wings", E.slide(SIDE).step(VERT, 1);
    FlyingCat, "FCA", "Flying Cat" => FreeBird, E.step(SIDE.or(BACK), 1).jump(FRONT, &[3]);
    FlyingHorse, "FHO", "Flying Horse" => FreeKing, E.step(VERT, 1).jump(FDIAG, &[2]);
    FlyingDragon, "FDN", "Flying Dragon" => DragonKing, E.jump(DIAG, &[2]);
    FlyingFalcon, "FFA", "Flying Falcon" => HornedFalcon, E.slide(DIAG).step(F, 1);
    FlyingCock, "FCO", "Flying Cock" => RaidingFalcon, E.step(FDIAG.or(SIDE), 1);
    RaidingFalcon, "RFA", "Raiding Falcon", E.slide(VERT).step(FDIAG.or(SIDE), 1);
    FlyingTiger, "FTG", "Flying Tiger", E.slide(DIAG).step(B, 1);

    ViolentOx, "VO", "Violent Ox" => FlyingOx, E.step(ORTHO, 2);
    ViolentBear, "VBR", "Violent Bear" => GreatBear, E.step(FDIAG, 2).step(SIDE.or(F), 1);
    ViolentStag, "VS", "Violent Stag" => RoamingAssault, SILVER;
    ViolentWolf, "VW", "Violent Wolf" => BearsEyes, GOLD;
    ViolentWind, "VWI", "Violent Wind", E.slide(VERT).step(SIDE, 2).step(DIAG, 1);

    LeftChariot, "LCH", "Left Chariot" => WhiteHorse, E.slide(F.or(FL).or(BR)).step(L, 1);
    RightChariot, "RCR", "Right Chariot" => WhiteHorse, E.slide(F.or(FR).or(BL)).step(R, 1);
    LeftTiger, "LTI", "Left Tiger" => WhiteTiger, E.slide(FL.or(BR)).step(VERT.or(L), 1);
    RightTiger, "RTG", "Right Tiger" => BlueDragon, E.slide(FR.or(BL)).step(VERT.or(R), 1);
    LeftDragon, "LDR", "Left Dragon" => DivineDragon, E.slide(L.or(FL)).step(R.or(B), 2);
    RightDragon, "RDR", "Right Dragon" => DivineTiger, E.slide(R.or(FR)).step(L.or(B), 2);
    LeftHowlingDog, "LHD", "Left Howling Dog" => LeftDog, E.slide(F).step(B.or(L), 1);
    RightHowlingDog, "RHD", "Right Howling Dog" => RightDog, E.slide(F).step(B.or(R), 1);
    LeftDog, "LDG", "Left Dog", E.slide(F.or(BL)).step(B, 1);
    RightDog, "RDG", "Right Dog", E.slide(F.or(BR)).step(B, 1);

    WhiteTiger, "WT", "White Tiger", E.slide(SIDE.or(FL)).step(VERT, 2);
    BlueDragon, "BD", "Blue Dragon", E.slide(VERT.or(FR)).step(SIDE, 2);
    VermillionSparrow, "VSP", "Vermillion Sparrow" => DivineSparrow, KING.slide(FR.or(BL));
    TurtleSnake, "TS", "Turtle Snake" => DivineTurtle, KING.slide(FL.or(BR));
    DivineSparrow, "DSP", "Divine Sparrow", E.slide(DIAG.or(SIDE)).step(VERT, 1);
    DivineTurtle, "DT", "Divine Turtle", E.slide(DIAG.or(VERT)).step(SIDE, 1);
    DivineTiger, "DTI", "Divine Tiger", E.slide(ORTHO.or(FR)).step(DIAG, 2);
    DivineDragon, "DDR", "Divine Dragon", E.slide(ORTHO.or(FL)).step(DIAG, 2);

    OldMonkey, "OM", "Old Monkey" => MountainWitch, E.step(DIAG.or(B), 1);
    BlindMonkey, "BMK", "Blind Monkey" => FlyingStag, E.step(DIAG.or(SIDE), 1);
    BlindDog, "BDG", "Blind Dog" => ViolentStag, E.step(FDIAG.or(SIDE).or(B), 1);
    BlindBear, "BBE", "Blind Bear" => FlyingStag, E.step(ALL.minus(VERT), 1);
    AngryBoar, "AB", "Angry Boar" => FreeBoar, E.step(ORTHO, 1);
    EvilWolf, "EW", "Evil Wolf" => VenomousWolf, E.step(FRONT.or(SIDE), 1);
    VenomousWolf, "VWF", "Venomous Wolf", KING;
    CoiledSerpent, "CSP", "Coiled Serpent" => CoiledDragon, E.step(VERT.or(BDIAG), 1);
    CoiledDragon, "CDR", "Coiled Dragon", E.slide(VERT.or(BDIAG)).step(FDIAG, 1);
    RecliningDragon, "RDN", "Reclining Dragon" => GreatDragon, E.step(ORTHO, 1);
    CatSword, "CS", "Cat Sword" => DragonHorse, E.step(DIAG, 1);
    PoisonousSnake, "PSN", "Poisonous Snake" => HookMover, E.step(F, 2).step(BDIAG, 1);
    ClimbingMonkey, "CM", "Climbing Monkey" => ViolentStag, E.step(FRONT.or(B), 1);
    EnchantedBadger, "EBA", "Enchanted Badger" => Donkey, E.step(SIDE, 2);
    EnchantedFox, "EFX", "Enchanted Fox" => TreacherousFox, E.step(DIAG, 2);
    DarkSpirit, "DS", "Dark Spirit" => BuddhistSpirit, E.step(ALL.minus(F.or(L)), 1);
    Deva, "DV", "Deva" => TeachingKing, E.step(ALL.minus(F.or(R)), 1);
    BuddhistSpirit, "BSP", "Buddhist Spirit", LION.slide(ALL.minus(VERT));
    TeachingKing, "TKG", "Teaching King", E.slide(ALL).jump(ALL, &[3]);
    Yaksha, "YA", "Yaksha" => Bishop, E.step(SIDE, 3).step(B.or(FDIAG), 1);
    Wrestler, "WR", "Wrestler" => GreatEagle, E.step(DIAG, 3).step(SIDE, 1);
    GuardianOfTheGods, "GOG", "Guardian of the Gods" => HeavenlyHorse, E.step(ORTHO, 3);
    BuddhistDevil, "BDV", "Buddhist Devil" => Lion, E.step(FDIAG, 3).step(SIDE.or(B), 1);
    Donkey, "DON", "Donkey" => CloudDragon, E.step(VERT, 1).jump(VERT, &[2]);
    GoldenDeer, "GDE", "Golden Deer" => WhiteHorse, E.slide(FDIAG).step(B, 1);
    SilverHare, "SHA", "Silver Hare" => Whale, E.slide(BDIAG).step(F, 1);

    GoldChariot, "GCH", "Gold Chariot" => PlayfulCockatoo, E.slide(VERT).step(SIDE.or(FDIAG), 1);
    SilverChariot, "SCH", "Silver Chariot" => GoosewingTurtle, E.slide(VERT).step(DIAG, 1);
    CopperChariot, "CCH", "Copper Chariot" => CopperElephant, E.slide(VERT).step(FDIAG, 1);
    StoneChariot, "STC", "Stone Chariot" => WalkingHeron, E.slide(VERT).step(FDIAG, 2);
    PlayfulCockatoo, "PCO", "Playful Cockatoo", E.slide(SIDE).step(VERT, 2).step(FDIAG, 5);
    GoosewingTurtle, "GWT", "Goosewing Turtle", E.slide(VERT).step(SIDE, 3).step(DIAG, 1);
    CopperElephant, "CEL", "Copper Elephant", E.slide(F).step(ALL.minus(F), 1);
    WalkingHeron, "WHE", "Walking Heron", E.slide(VERT).step(FDIAG, 2).step(SIDE, 2);
    EarthChariot, "ECH", "Earth Chariot" => YoungBird, E.slide(VERT).step(SIDE, 1);
    YoungBird, "YB", "Young Bird", E.slide(VERT).step(DIAG, 2);
    BurningChariot, "BCH", "Burning Chariot", E.slide(ORTHO).step(FDIAG, 3);
    OxCart, "OC", "Ox Cart" => PloddingOx, E.slide(F);
    PloddingOx, "POX", "Plodding Ox", KING;

    BeastCadet, "BC", "Beast Cadet" => BeastOfficer, E.step(ALL.minus(B), 2);
    BeastOfficer, "BO", "Beast Officer" => BeastBird, E.step(ALL.minus(BACK), 3).step(BACK, 1);
    BeastBird, "BBI", "Beast Bird", E.slide(ALL.minus(BACK)).step(BACK, 2);
    CaptiveCadet, "CC", "Captive Cadet" => CaptiveOfficer, E.step(ALL.minus(B), 3);
    CaptiveOfficer, "CO", "Captive Officer" => CaptiveBird, E.step(ALL.minus(BACK), 2).step(BACK, 1);
    CaptiveBird, "CB", "Captive Bird", E.slide(ALL.minus(B)).step(B, 3);

    NorthernBarbarian, "NB", "Northern Barbarian" => WoodenDove, E.step(FRONT.or(SIDE), 1).step(VERT, 2);
    SouthernBarbarian, "SBA", "Southern Barbarian" => GoldenBird, E.step(FDIAG, 2).step(SIDE, 1);
    EasternBarbarian, "EB", "Eastern Barbarian" => Lion, E.step(SIDE, 2).step(DIAG.or(VERT), 1);
    WesternBarbarian, "WB", "Western Barbarian" => LionDog, E.step(VERT, 2).step(FDIAG.or(SIDE), 1);

    GreatStag, "GS", "Great Stag", E.slide(VERT.or(FDIAG)).step(SIDE, 2).step(BDIAG, 1);
    GreatBear, "GBE", "Great Bear", E.slide(FDIAG.or(SIDE)).step(B, 1);
    GreatTurtle, "GTU", "Great Turtle", E.slide(ALL).jump(VERT, &[3]);
    GreatWhale, "GWH", "Great Whale", E.slide(VERT.or(DIAG));
    GreatEagle, "GEA", "Great Eagle", E.slide(ALL).jump(FDIAG, &[2]).igui(FDIAG);
    GreatShark, "GSH", "Great Shark", E.slide(FRONT.or(SIDE)).step(BACK, 2);
    GreatDove, "GDO", "Great Dove", E.slide(DIAG).step(ORTHO, 3);
    GreatElephant, "GEL", "Great Elephant", E.slide(ALL.minus(SIDE)).step(SIDE, 3);
    GreatLeopard, "GLE", "Great Leopard", E.slide(F).step(FDIAG, 3).step(SIDE, 2).step(BACK, 1);
    GreatTiger, "GTI", "Great Tiger", E.slide(ORTHO.minus(F)).step(F, 1);
    GreatDreamEater, "GDR", "Great Dream-Eater", E.slide(ALL).jump(ORTHO, &[5]);
    GreatMaster, "GMA", "Great Master", E.slide(ALL).jump(FRONT, &[5]);
    GreatStandard, "GST", "Great Standard", E.slide(ALL.minus(BDIAG)).step(BDIAG, 3);
    FrontStandard, "FSD", "Front Standard" => GreatStandard, E.slide(ORTHO).step(DIAG, 3);
    StandardBearer, "SBR", "Standard Bearer" => FrontStandard, E.slide(FRONT).step(SIDE, 2);
    CenterStandard, "CST", "Center Standard", E.slide(ORTHO).step(DIAG, 3).jump(FDIAG, &[3]);
    CenterMaster, "CMA", "Center Master", E.slide(ALL).jump(ALL, &[3]).area();
    RoamingAssault, "RA", "Roaming Assault", E.step(ALL, 5);

    LionHawk, "LH", "Lion Hawk", LION.slide(DIAG);
    FireDemon, "FID", "Fire Demon", E.slide(SIDE.or(DIAG)).step(VERT, 2).area();
    FireDragon, "FRD", "Fire Dragon", E.slide(FRONT).step(SIDE.or(BACK), 2);
    LeopardKing, "LK", "Leopard King", E.step(ALL, 5);
    KirinMaster, "KM", "Kirin Master", E.slide(ALL).jump_then(ORTHO, &[3], UNLIMITED);
    PhoenixMaster, "PM", "Phoenix Master", E.slide(ALL).jump_then(DIAG, &[3], UNLIMITED);
    HeavenlyHorse, "HH", "Heavenly Horse", E.jump(KNIGHT_FORWARD.or(KNIGHT_BACKWARD), &[1]);
    ThunderRunner, "TR", "Thunder Runner", E.slide(VERT.or(BDIAG)).step(SIDE, 4);
    WindGeneral, "WDG", "Wind General" => ViolentWind, E.slide(F).step(SIDE.or(FDIAG).or(B), 1);
    RainDemon, "RND", "Rain Demon", E.slide(VERT).step(SIDE, 2).step(DIAG, 3);
    RainDragon, "RDA", "Rain Dragon" => GracefulLady, E.slide(ALL.minus(F)).step(F, 1);
    GracefulLady, "GL", "Graceful Lady", E.slide(ALL).igui(ORTHO);
    CloudDragon, "CD", "Cloud Dragon", E.slide(SIDE.or(BACK).or(F)).step(FDIAG, 1);
    CloudEagle, "CE", "Cloud Eagle", E.slide(VERT).step(SIDE, 1).step(FDIAG, 3);
    SwoopingOwl, "SO", "Swooping Owl" => CloudEagle, E.step(F.or(BDIAG), 1);
    Bat, "BA", "Bat" => DivineBat, E.step(FDIAG, 2).step(B, 1);
    DivineBat, "DBA", "Divine Bat", E.slide(FDIAG.or(B)).step(SIDE, 1);
    OldKite, "OK", "Old Kite" => ViolentWind, E.step(DIAG, 2).step(SIDE, 1);
    OldRat, "ORA", "Old Rat" => Bat, E.step(F.or(BDIAG), 1);
    ChineseCock, "CCK", "Chinese Cock" => WizardStork, E.step(FDIAG.or(SIDE).or(B), 1);
    WizardStork, "WS", "Wizard Stork", E.slide(VERT.or(FDIAG)).step(SIDE.or(BDIAG), 1);
    BirdOfParadise, "BOP", "Bird of Paradise", E.slide(DIAG.or(F)).step(SIDE, 3).step(B, 2);
    CeramicDove, "CDO", "Ceramic Dove", E.step(ORTHO, 2).slide(DIAG);
    EarthDragon, "EDR", "Earth Dragon" => RainDragon, E.step(F.or(BDIAG), 2).step(FDIAG.or(B), 1);
    BearsEyes, "BE", "Bear's Eyes", KING;
    FragrantElephant, "FRE", "Fragrant Elephant" => GreatElephant, E.step(ALL, 2);
    LittleTurtle, "LTU", "Little Turtle" => TreasureTurtle,
        E.slide(VERT).step(SIDE, 2).jump(VERT, &[2]);
    TreasureTurtle, "TT", "Treasure Turtle", E.slide(VERT.or(DIAG)).jump(VERT, &[2]);
    ShearingDragon, "SHD", "Shearing Dragon", E.slide(ALL.minus(B)).step(B, 2);
    PrancingStag, "PS", "Prancing Stag" => SquareMover, E.step(FRONT.or(SIDE), 1).jump(VERT, &[2]);
    SquareMover, "SQM", "Square Mover", E.slide(ORTHO).step(FDIAG, 1);
    ForestDemon, "FOD", "Forest Demon" => ThunderRunner, E.slide(SIDE.or(FDIAG)).step(F.or(BDIAG), 3);
    SpiritTurtle, "ST", "Spirit Turtle", E.slide(ALL).jump(ORTHO, &[3]);
    Kylin, "KY", "Kylin" => KirinMaster, E.step(DIAG, 1).jump(ORTHO, &[2]).jump(FDIAG, &[3]);
    Fowl, "FW", "Fowl" => SpiritTurtle, E.step(FDIAG.or(B), 1).jump(F, &[2]);
}

/// Looks up the movement profile of `identity` under the given options.
///
/// # Examples
///
/// ```
/// use taikyoku::catalog::{profile_for, PieceIdentity};
/// use taikyoku::{Direction, GameOptions};
///
/// let pawn = profile_for(PieceIdentity::Pawn, GameOptions::empty());
/// assert_eq!(1, pawn.step_range(Direction::Up));
/// assert_eq!(0, pawn.step_range(Direction::Down));
/// ```
pub fn profile_for(identity: PieceIdentity, options: GameOptions) -> &'static MovementProfile {
    match identity {
        PieceIdentity::TreacherousFox if options.contains(GameOptions::ALTERNATE_TREACHEROUS_FOX) => {
            &TREACHEROUS_FOX_ALT
        }
        PieceIdentity::HeavenlyTetrarch
            if options.contains(GameOptions::ALTERNATE_HEAVENLY_TETRARCH) =>
        {
            &HEAVENLY_TETRARCH_ALT
        }
        PieceIdentity::WoodenDove if options.contains(GameOptions::ALTERNATE_WOODEN_DOVE) => {
            &WOODEN_DOVE_ALT
        }
        _ => &identity.entry().profile,
    }
}

impl PieceIdentity {
    /// Returns the catalog row of the identity.
    pub fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    /// Converts the instance into the unique number for array indexing purpose.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the short board label, e.g. `"DE"` for the Drunk Elephant.
    pub fn abbreviation(self) -> &'static str {
        self.entry().abbreviation
    }

    /// Returns the English display name.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Returns the identity this piece becomes when it promotes.
    pub fn promotes_to(self) -> Option<PieceIdentity> {
        self.entry().promotes_to
    }

    /// Returns true if losing every piece of this kind loses the game.
    pub fn is_royal(self) -> bool {
        matches!(self, PieceIdentity::King | PieceIdentity::CrownPrince)
    }

    /// Returns the rank used by range capture. A ranged slide only passes over enemy pieces
    /// of a lower rank than the moving piece.
    pub fn capture_rank(self) -> u8 {
        match self {
            PieceIdentity::King | PieceIdentity::CrownPrince => 4,
            PieceIdentity::GreatGeneral => 3,
            PieceIdentity::ViceGeneral => 2,
            PieceIdentity::RookGeneral | PieceIdentity::BishopGeneral => 1,
            _ => 0,
        }
    }

    /// Looks up an identity by its board label.
    pub fn from_abbreviation(abbr: &str) -> Option<PieceIdentity> {
        CATALOG
            .iter()
            .find(|e| e.abbreviation == abbr)
            .map(|e| e.identity)
    }
}

impl fmt::Display for PieceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rows_in_enum_order() {
        assert_eq!(PieceIdentity::COUNT, CATALOG.len());
        for (i, id) in PieceIdentity::ALL.iter().enumerate() {
            assert_eq!(i, id.index());
            assert_eq!(*id, CATALOG[i].identity);
        }
        assert!(PieceIdentity::COUNT > 240);
    }

    #[test]
    fn labels_are_unique() {
        let mut abbrs = HashSet::new();
        let mut names = HashSet::new();
        for id in PieceIdentity::ALL {
            assert!(abbrs.insert(id.abbreviation()), "duplicate label {}", id.abbreviation());
            assert!(names.insert(id.name()), "duplicate name {}", id.name());
            assert_eq!(Some(*id), PieceIdentity::from_abbreviation(id.abbreviation()));
            assert_eq!(Some(*id), PieceIdentity::from_id(id.id()));
        }
        assert_eq!(None, PieceIdentity::from_id("Emperor"));
    }

    #[test]
    fn every_piece_can_move() {
        for options in [GameOptions::empty(), GameOptions::all()] {
            for id in PieceIdentity::ALL {
                assert!(!profile_for(*id, options).is_immobile(), "{id} cannot move");
            }
        }
    }

    #[test]
    fn no_self_promotion() {
        for id in PieceIdentity::ALL {
            assert_ne!(Some(*id), id.promotes_to());
        }
        assert_eq!(Some(PieceIdentity::CrownPrince), PieceIdentity::DrunkElephant.promotes_to());
        assert_eq!(None, PieceIdentity::King.promotes_to());
    }

    #[test]
    fn royalty() {
        let royals: Vec<_> = PieceIdentity::ALL.iter().filter(|id| id.is_royal()).collect();
        assert_eq!(vec![&PieceIdentity::King, &PieceIdentity::CrownPrince], royals);
    }

    #[test]
    fn alternates() {
        let fox = PieceIdentity::TreacherousFox;
        assert!(!profile_for(fox, GameOptions::empty()).area_move());
        assert!(profile_for(fox, GameOptions::ALTERNATE_TREACHEROUS_FOX).area_move());

        let tetrarch = PieceIdentity::HeavenlyTetrarch;
        assert!(profile_for(tetrarch, GameOptions::empty()).igui_in(Direction::Up));
        let alt = profile_for(tetrarch, GameOptions::ALTERNATE_HEAVENLY_TETRARCH);
        assert!(!alt.igui_in(Direction::Up));
        assert!(alt.jump_range(Direction::Left).is_some());

        let dove = PieceIdentity::WoodenDove;
        assert_eq!(0, profile_for(dove, GameOptions::empty()).step_range(Direction::UpLeft));
        assert_eq!(5, profile_for(dove, GameOptions::ALTERNATE_WOODEN_DOVE).step_range(Direction::UpLeft));

        // Options only touch their own piece.
        assert_eq!(
            profile_for(PieceIdentity::Lion, GameOptions::empty()),
            profile_for(PieceIdentity::Lion, GameOptions::all())
        );
    }

    #[test]
    fn special_moves() {
        let eagle = profile_for(PieceIdentity::SoaringEagle, GameOptions::empty());
        assert!(eagle.igui_in(Direction::UpLeft));
        assert_eq!(UNLIMITED, eagle.step_range(Direction::Down));

        let lion = profile_for(PieceIdentity::Lion, GameOptions::empty());
        assert!(lion.area_move());
        assert!(lion.jump_range(Direction::KnightLeftUp).is_some());

        let general = profile_for(PieceIdentity::GreatGeneral, GameOptions::empty());
        assert!(Direction::BASIC.iter().all(|d| general.range_capture_in(*d)));

        assert_eq!(
            Some(HookMove::ForwardDiagonal),
            profile_for(PieceIdentity::Peacock, GameOptions::empty()).hook_move()
        );
    }
}
