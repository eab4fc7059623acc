//! The static coffee cup drawn under the steam.

/// ASCII art for the cup, one canvas line per text line.
///
/// The first line is intentionally empty so the rim sits one line below the
/// art's origin.
pub const CUP_ART: &str = "\n\
\x20                              ..........\n\
\x20                         ..::::::::::-----:-:-::::....\n\
\x20                       .::---=++++*****+***++++##%%###*+=-:.   .\n\
\x20                       .:=****************+**###########%%%#+:...\n\
\x20                        .-+#%%%%%%%%%%%%%%%%##############%%#+...\n\
\x20                           .-=+**#####################**+=-::::::..........\n\
\x20                                  ..::-----------:::.......:::::::...     ...\n\
\x20                                                 ..........:::::::.         ..\n\
\x20                                                  .........:::::..           .\n\
\x20                                                 ..........:::.:             .\n\
\x20                     ...                         ..........:::::--:..       .\n\
\x20                 ........                       ..........:::::-------.    .\n\
\x20              ............                     ...........::..-----::..  ..\n\
\x20            ...............                   ...............:-:::... ..:::.\n\
\x20           ..................              .................:::.....:::::....\n\
\x20           .....................         ..................:...:::::::..... .\n\
\x20           .............................................::::::::::........ .\n\
\x20             ...............   .......................:-:::::::............\n\
\x20               .............    ..  ................:--::................\n\
\x20                  ...........             .............................\n\
\x20                      ..........                  ..................\n\
\x20                                               .................\n\
\x20                                ...........................";

/// Lines of the cup art, top to bottom.
pub fn lines() -> impl Iterator<Item = &'static str> {
    CUP_ART.lines()
}
