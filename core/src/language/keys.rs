use serde::{Serialize, Serializer};
use std::fmt;

/// Declares the closed set of string keys.
///
/// Each entry is `Variant => "symbolic name", english default;`. The symbolic
/// name doubles as the placeholder text shown before any source is loaded,
/// and its lowercase form is the key accepted in language files.
macro_rules! string_keys {
    ($($variant:ident => $name:literal, $english:expr;)*) => {
        /// Every translatable UI text slot.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StringKey {
            $($variant,)*
        }

        impl StringKey {
            /// All keys, in declaration order.
            pub const ALL: &'static [StringKey] = &[$(StringKey::$variant,)*];

            /// Symbolic name of the key, also used as its placeholder text.
            pub const fn name(self) -> &'static str {
                match self {
                    $(StringKey::$variant => $name,)*
                }
            }

            /// Compiled-in English text.
            pub fn english(self) -> &'static str {
                match self {
                    $(StringKey::$variant => $english,)*
                }
            }
        }
    };
}

impl StringKey {
    /// Position of the key inside a [`StringKey::ALL`]-sized table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key accepted in language files, or `None` for the language name,
    /// which only the `[header]` line assigns.
    pub fn file_key(self) -> Option<String> {
        match self {
            StringKey::CurrentLanguageLong => None,
            other => Some(other.name().to_lowercase()),
        }
    }
}

impl fmt::Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for StringKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

string_keys! {
    // Language identifier
    CurrentLanguageLong => "CurrentLanguageLong", "English (Internal)";
    CurrentLanguageShort => "CurrentLanguageShort", "en-i";
    CurrentLanguageHint => "CurrentLanguageHint", "Click here to change";
    CurrentLanguageVersion => "CurrentLanguageVersion", env!("CARGO_PKG_VERSION");

    // Generics
    GenericInputBest => "GenericInputBest", "best";
    GenericInputWorst => "GenericInputWorst", "worst";
    GenericCancel => "GenericCancel", "Cancel";
    GenericSkip => "GenericSkip", "Skip";
    GenericSound => "GenericSound", "Sound";
    GenericVideo => "GenericVideo", "Video";
    GenericAudio => "GenericAudio", "Audio";
    GenericCustom => "GenericCustom", "Custom";
    GenericRetry => "GenericRetry", "Retry";
    GenericStart => "GenericStart", "Start";
    GenericStop => "GenericStop", "Stop";
    GenericExit => "GenericExit", "Exit";
    GenericOk => "GenericOk", "OK";
    GenericSave => "GenericSave", "Save";
    GenericAdd => "GenericAdd", "Add";
    GenericClose => "GenericClose", "Close";
    GenericRemoveSelected => "GenericRemoveSelected", "Remove selected";
    GenericVerifyLinks => "GenericVerifyLinks", "Verify copied links";
    GenericDoNotReEncode => "GenericDoNotReEncode", "(Do not re-encode)";
    GenericDoNotRemux => "GenericDoNotRemux", "(Do not remux)";
    FrmGenericDownloadProgress => "frmGenericDownloadProgress", "Downloading...";
    ChContainer => "chContainer", "Container";
    ChFileSize => "chFileSize", "File size";
    ChFormatId => "chFormatId", "ID";
    ChVideoQuality => "chVideoQuality", "Quality";
    ChVideoFPS => "chVideoFPS", "FPS";
    ChVideoBitrate => "chVideoBitrate", "Video bitrate";
    ChVideoDimension => "chVideoDimension", "Video dimensions";
    ChVideoCodec => "chVideoCodec", "Video codec";
    ChAudioBitrate => "chAudioBitrate", "Audio bitrate";
    ChAudioSampleRate => "chAudioSampleRate", "Audio sample rate";
    ChAudioCodec => "chAudioCodec", "Audio codec";

    // Dialogs
    DlgFirstTimeInitialMessage => "dlgFirstTimeInitialMessage", "youtube-dl-gui is a visual extension to youtube-dl and is not affiliated with the developers of youtube-dl in any way.\n\nThis program (and I) does not condone piracy or illegally downloading of any video you do not own the rights to or is not in public domain.\n\nAny help regarding any problems when downloading anything illegal (in my jurisdiction) will be ignored. This message will not appear again.\n\nHave you read the above?";
    DlgFirstTimeDownloadFolder => "dlgFirstTimeDownloadFolder", "Downloads are saved to your downloads folder by default, would you like to specify a different location now?\n(You can change this in the settings at any time)";
    DlgFirstTimeDownloadYoutubeDl => "dlgFirstTimeDownloadYoutubeDl", "Would you like to download youtube-dl (yt-dlp is the default fork)? You can do this manually in the settings if you do not wish to do it now.";
    DlgFirstTimeDownloadFfmpeg => "dlgFirstTimeDownloadFfmpeg", "Would you like to download ffmpeg? You can do this manually in the settings if you do not wish to do it now.";
    DlgClipboardAutoDownloadNotice => "dlgClipboardAutoDownloadNotice", "Using the clipboard auto downloader will automatically attempt to download verified links from the clipboard using the selected settings on the main form. Please do not copy any sensitive information while this option is enabled, ever.";
    DlgBatchDownloadClipboardScannerNotice => "dlgBatchDownloadClipboardScannerNotice", "Enabling this option will add anything from your clipboard when something is copied (link or not). It will need to be manually enabled per-converter instance. Take care to not copy any sensitive information to the cipboard.";
    DlgMainArgsTxtDoesntExist => "dlgMainArgsTxtDoesntExist", "args.txt does not exist, create it and put in arguments to use this command";
    DlgMainArgsTxtIsEmpty => "dlgMainArgsTxtIsEmpty", "args.txt is empty, save arguments to the file to use this command";
    DlgMainArgsNoneSaved => "dlgMainArgsNoneSaved", "No arguments are saved in the application settings, save arguments to the settings to use this command";
    DlgConvertSelectFileToConvert => "dlgConvertSelectFileToConvert", "Select a file to convert...";
    DlgMergeSelectFileToMerge => "dlgMergeSelectFileToMerge", "Select a file to merge...";
    DlgSaveOutputFileAs => "dlgSaveOutputFileAs", "Save the output file as...";
    DlgLanguageHashNoMatch => "dlgLanguageHashNoMatch", "The langauge file hash doesn't match. This isn't very important since it's not important to the runtime of the program, but your language may be wrong.";
    DlgFindDownloadFolder => "dlgFindDownloadFolder", "Select a directory to save downloads to...";
    DlgUpdateFailedToCheck => "dlgUpdateFailedToCheck", "The update check has failed. Would you like to manually check?";
    DlgUpdateNoUpdateAvailable => "dlgUpdateNoUpdateAvailable", "No updates available.\r\n\r\nCurrent version: {0}\r\nLatest version: {1}";
    DlgUpdateNoBetaUpdateAvailable => "dlgUpdateNoBetaUpdateAvailable", "No beta updates available.\r\n\r\nCurrent version: {0}\r\nNewest version: {1}";
    DlgUpdateNoValidYoutubeDl => "dlgUpdateNoValidYoutubeDl", "Could not find a valid youtube-dl to download or update.";
    DlgUpdatedYoutubeDl => "dlgUpdatedYoutubeDl", "Youtube-dl has been updated.";
    DlgUpdaterHashNoMatch => "dlgUpdaterHashNoMatch", "The hash of the updater does not match the internally known hash. It might still work but yknow. Update anyways?";
    DlgUpateYoutubeDlNoUpdateRequired => "dlgUpateYoutubeDlNoUpdateRequired", "Youtube-dl does not require an update at this moment.\r\n\r\nCurrent version: {0}\r\nLatest release: {1}";

    // frmAbout
    FrmAbout => "frmAbout", "About";
    LbAboutBody => "lbAboutBody", "youtube-dl by {0}\nyoutube-dl-gui by {1}\ndebug date {2}";
    LlbCheckForUpdates => "llbCheckForUpdates", "Check for updates";

    // frmArchiveDownloader
    FrmArchiveDownloader => "frmArchiveDownloader", "Archive downloader";
    LbArchiveDownloaderDescription => "lbArchiveDownloaderDescription", "This will download any removed youtube video, if it was archived before removal.";
    TxtArchiveDownloaderHint => "txtArchiveDownloaderHint", "Enter the youtube URL or video id";

    // frmAuthentication
    FrmAuthentication => "frmAuthentication", "Authentication";
    LbAuthNotice => "lbAuthNotice", "Enter your authentication information:";
    LbAuthUsername => "lbAuthUsername", "Username";
    LbAuthPassword => "lbAuthPassword", "Password";
    LbAuth2Factor => "lbAuth2Factor", "2-Factor";
    LbAuthVideoPassword => "lbAuthVideoPassword", "Video password";
    ChkAuthUseNetrc => "chkAuthUseNetrc", "Use .netrc for authentication";
    LbAuthNoSave => "lbAuthNoSave", "Your information will not be saved for security reasons.";
    BtnAuthBeginDownload => "btnAuthBeginDownload", "Begin download";

    // frmBatchConverter
    FrmBatchConverter => "frmBatchConverter", "Batch converter";
    LbBatchConverterInput => "lbBatchConverterInput", "Input file";
    TxtBatchConverterInputFile => "txtBatchConverterInputFile", "File to be converted...";
    LbBatchConverterOutput => "lbBatchConverterOutput", "Output file";
    TxtBatchConverterOutputFile => "txtBatchConverterOutputFile", "File to be created...";
    TxtBatchConverterCustomConversionArguments => "txtBatchConverterCustomConversionArguments", "Custom arguments (Leave empty for defaults)";
    SbBatchConverterIdle => "sbBatchConverterIdle", "Waiting for batch conversion to start";
    SbBatchConverterConverting => "sbBatchConverterConverting", "Batch conversion in progress...";
    SbBatchConverterFinished => "sbBatchConverterFinished", "Batch conversion finished. Add more items to start another batch, or exit";
    SbBatchConverterAborted => "sbBatchConverterAborted", "The batch conversion has been aborted";

    // frmBatchDownloader
    FrmBatchDownload => "frmBatchDownload", "Batch downloader";
    LbBatchDownloadLink => "lbBatchDownloadLink", "Download link";
    LbBatchDownloadType => "lbBatchDownloadType", "Download type";
    LbBatchDownloadVideoSpecificArgument => "lbBatchDownloadVideoSpecificArgument", "Video-specific argument";
    SbBatchDownloadLoadArgs => "sbBatchDownloadLoadArgs", "Load args";
    MBatchDownloaderLoadArgsFromSettings => "mBatchDownloaderLoadArgsFromSettings", "Load args from settings";
    MBatchDownloaderLoadArgsFromArgsTxt => "mBatchDownloaderLoadArgsFromArgsTxt", "Load args from ./args.txt";
    MBatchDownloaderLoadArgsFromFile => "mBatchDownloaderLoadArgsFromFile", "Load args from file...";
    SbBatchDownloaderImportLinks => "sbBatchDownloaderImportLinks", "Import links...";
    MBatchDownloaderImportLinksFromFile => "mBatchDownloaderImportLinksFromFile", "Import links from a file";
    MBatchDownloaderImportLinksFromClipboard => "mBatchDownloaderImportLinksFromClipboard", "Import links from the clipboard";
    SbBatchDownloaderIdle => "sbBatchDownloaderIdle", "Waiting for batch download start";
    SbBatchDownloaderDownloading => "sbBatchDownloaderDownloading", "Batch download in progress...";
    SbBatchDownloaderFinished => "sbBatchDownloaderFinished", "Batch download finished. Add more items to start another batch, or exit";
    SbBatchDownloaderAborted => "sbBatchDownloaderAborted", "The batch download has been aborted";
    ChkBatchDownloadClipboardScanner => "chkBatchDownloadClipboardScanner", "Scan clipboard";

    // frmConverter
    FrmConverter => "frmConverter", "Converting";
    FrmConverterComplete => "frmConverterComplete", "Conversion finished";
    FrmConverterError => "frmConverterError", "Error converting";
    ChkConverterCloseAfterConversion => "chkConverterCloseAfterConversion", "Close after converting";
    BtnConverterAbortBatchConversions => "btnConverterAbortBatchConversions", "Abort batch conversions";

    // frmDownloader
    FrmDownloader => "frmDownloader", "Downloading";
    FrmDownloaderComplete => "frmDownloaderComplete", "Download finished";
    FrmDownloaderError => "frmDownloaderError", "Error downloading";
    ChkDownloaderCloseAfterDownload => "chkDownloaderCloseAfterDownload", "Close after download";
    BtnDownloaderAbortBatch => "btnDownloaderAbortBatch", "Abort batch download";

    // frmDownloadLanguage
    FrmDownloadLanguage => "frmDownloadLanguage", "Download a language file...";

    // frmException
    FrmException => "frmException", "An exception occured";
    LbExceptionHeader => "lbExceptionHeader", "An exception has occured";
    LbExceptionDescription => "lbExceptionDescription", "Below is the error that occured. Feel free to open a new issue and report it.";
    RtbExceptionDetails => "rtbExceptionDetails", "Feel free to copy + paste this entire text wall into a new issue on Github";
    BtnExceptionGithub => "btnExceptionGithub", "Github";
    TabExceptionDetails => "tabExceptionDetails", "Exception details";
    TabExceptionExtraInfo => "tabExceptionExtraInfo", "Extra info";

    // frmExtendedDownloader
    FrmExtendedDownloaderRetrieving => "frmExtendedDownloaderRetrieving", "Retrieving data... - {0}";
    LbExtendedDownloaderLink => "lbExtendedDownloaderLink", "Link";
    LbExtendedDownloaderUploader => "lbExtendedDownloaderUploader", "Uploader";
    LbExtendedDownloaderViews => "lbExtendedDownloaderViews", "Views";
    LbExtendedDownloaderDownloadingThumbnail => "lbExtendedDownloaderDownloadingThumbnail", "Downloading thumbnail...";
    LbExtendedDownloaderDownloadingThumbnailFailed => "lbExtendedDownloaderDownloadingThumbnailFailed", "Unable to download thumbnail";
    BtnExtendedDownloaderDownloadThumbnail => "btnExtendedDownloaderDownloadThumbnail", "Get thumbnail";
    TabExtendedDownloaderDescription => "tabExtendedDownloaderDescription", "Description";
    TabExtendedDownloaderVerbose => "tabExtendedDownloaderVerbose", "Verbose";
    TabExtendedDownloaderFormatOptions => "tabExtendedDownloaderFormatOptions", "Format download options";
    ChkExtendedDownloaderVideoSeparateAudio => "chkExtendedDownloaderVideoSeparateAudio", "Separate audio from video";
    LbExtendedDownloaderNoVideoFormatsAvailable => "lbExtendedDownloaderNoVideoFormatsAvailable", "No video formats are available.";
    LbExtendedDownloaderNoAudioFormatsAvailable => "lbExtendedDownloaderNoAudioFormatsAvailable", "No audio formats are available.";
    LbVideoRemux => "lbVideoRemux", "Video remux";
    TxtExtendedDownloaderMediaTitle => "txtExtendedDownloaderMediaTitle", "Retrieving media information...";

    // frmLanguage
    FrmLanguage => "frmLanguage", "Language select";
    BtnLanguageRefresh => "btnLanguageRefresh", "Refresh";
    BtnLanguageDownload => "btnLanguageDownload", "Download...";

    // frmLog
    FrmLog => "frmLog", "Log";
    FrmLogClear => "frmLogClear", "Clear";

    // frmMain
    MSettings => "mSettings", "Settings";
    MTools => "mTools", "Tools";
    MBatchDownload => "mBatchDownload", "Batch download";
    MBatchConvert => "mBatchConvert", "Batch convert";
    MArchiveDownloader => "mArchiveDownloader", "Archive downloader";
    MDownloadSubtitles => "mDownloadSubtitles", "Download subtitles";
    MMiscTools => "mMiscTools", "Misc tools";
    MClipboardAutoDownload => "mClipboardAutoDownload", "Clipboard auto download";
    MHelp => "mHelp", "Help";
    MLanguage => "mLanguage", "Language";
    MSupportedSites => "mSupportedSites", "Supported sites";
    MAbout => "mAbout", "About";
    TabDownload => "tabDownload", "Download";
    TabConvert => "tabConvert", "Convert";
    TabMerge => "tabMerge", "Merge";
    LbURL => "lbURL", "URL";
    TxtUrlHint => "txtUrlHint", "Video URL";
    GbDownloadType => "gbDownloadType", "Download type";
    LbQuality => "lbQuality", "Quality";
    LbFormat => "lbFormat", "Format";
    ChkUseSelection => "chkUseSelection", "Video Selection";
    RbVideoSelectionPlaylistIndex => "rbVideoSelectionPlaylistIndex", "Playlist index";
    RbVideoSelectionPlaylistItems => "rbVideoSelectionPlaylistItems", "Playlist items";
    RbVideoSelectionBeforeDate => "rbVideoSelectionBeforeDate", "Before date";
    RbVideoSelectionOnDate => "rbVideoSelectionOnDate", "On date";
    RbVideoSelectionAfterDate => "rbVideoSelectionAfterDate", "After date";
    TxtPlaylistStartHint => "txtPlaylistStartHint", "Start index";
    TxtPlaylistEndHint => "txtPlaylistEndHint", "End index";
    TxtPlaylistItemsHint => "txtPlaylistItemsHint", "Video indexes (separated by commas)";
    TxtVideoDateHint => "txtVideoDateHint", "Date (YYYYMMDD)";
    LbCustomArguments => "lbCustomArguments", "Custom arguments";
    SbDownload => "sbDownload", "Download";
    MDownloadWithAuthentication => "mDownloadWithAuthentication", "Download with authentication...";
    MBatchDownloadFromFile => "mBatchDownloadFromFile", "Batch download from file...";
    MQuickDownloadForm => "mQuickDownloadForm", "Quick download";
    MQuickDownloadFormAuthentication => "mQuickDownloadFormAuthentication", "Quick download (authenticate)";
    MExtendedDownloadForm => "mExtendedDownloadForm", "Extended download...";
    MsgBatchDownloadFromFile => "msgBatchDownloadFromFile", "Create a text file and put all the video links you want to download into it, separated as one per line.\nDo you want to skip seeing this message when batch downloading using this option?";
    BtnMainExtended => "btnMainExtended", "Details...";
    LbConvertInput => "lbConvertInput", "Input";
    LbConvertOutput => "lbConvertOutput", "Output";
    RbConvertAuto => "rbConvertAuto", "Automatic";
    RbConvertAutoFFmpeg => "rbConvertAutoFFmpeg", "Auto ffmpeg";
    BtnConvert => "btnConvert", "Convert";
    LbMergeInput1 => "lbMergeInput1", "Input 1";
    LbMergeInput2 => "lbMergeInput2", "Input 2";
    LbMergeOutput => "lbMergeOutput", "Output";
    ChkMergeAudioTracks => "chkMergeAudioTracks", "Merge audio tracks";
    ChkMergeDeleteInputFiles => "chkMergeDeleteInputFiles", "Delete input files";
    BtnMerge => "btnMerge", "Merge";
    CmTrayShowForm => "cmTrayShowForm", "Show form";
    CmTrayDownloader => "cmTrayDownloader", "Downloader...";
    CmTrayDownloadClipboard => "cmTrayDownloadClipboard", "From clipboard...";
    CmTrayDownloadBestVideo => "cmTrayDownloadBestVideo", "Download best video";
    CmTrayDownloadBestAudio => "cmTrayDownloadBestAudio", "Download best audio";
    CmTrayDownloadCustom => "cmTrayDownloadCustom", "Download custom...";
    CmTrayDownloadCustomTxtBox => "cmTrayDownloadCustomTxtBox", "From form textbox";
    CmTrayDownloadCustomTxt => "cmTrayDownloadCustomTxt", "From ./args.txt";
    CmTrayDownloadCustomSettings => "cmTrayDownloadCustomSettings", "From settings";
    CmTrayConverter => "cmTrayConverter", "Converter...";
    CmTrayConvertTo => "cmTrayConvertTo", "Conver to...";
    CmTrayConvertVideo => "cmTrayConvertVideo", "Video";
    CmTrayConvertAudio => "cmTrayConvertAudio", "Audio";
    CmTrayConvertCustom => "cmTrayConvertCustom", "Custom";
    CmTrayConvertAutomatic => "cmTrayConvertAutomatic", "Automatic";
    CmTrayConvertAutoFFmpeg => "cmTrayConvertAutoFFmpeg", "Auto ffmpeg";
    CmTrayExit => "cmTrayExit", "Exit";

    // frmSettings
    FrmSettings => "frmSettings", "youtube-dl-gui settings";
    TabSettingsGeneral => "tabSettingsGeneral", "General";
    TabSettingsDownloads => "tabSettingsDownloads", "Downloads";
    TabSettingsConverter => "tabSettingsConverter", "Converter";
    TabSettingsExtensions => "tabSettingsExtensions", "Extensions";
    TabSettingsErrors => "tabSettingsErrors", "Errors";
    TabSettingsGeneralYoutubeDl => "tabSettingsGeneralYoutubeDl", "youtube-dl";
    TabSettingsGeneralFfmpeg => "tabSettingsGeneralFfmpeg", "ffmpeg";
    LbSettingsGeneralYoutubeDlPath => "lbSettingsGeneralYoutubeDlPath", "youtube-dl path";
    ChkSettingsGeneralUseStaticYoutubeDl => "chkSettingsGeneralUseStaticYoutubeDl", "Use static youtube-dl";
    OfdTitleYoutubeDl => "ofdTitleYoutubeDl", "Select youtube-dl";
    OfdFilterYoutubeDl => "ofdFilterYoutubeDl", "youtube-dl executable";
    LbSettingsGeneralFFmpegDirectory => "lbSettingsGeneralFFmpegDirectory", "ffmpeg directory";
    ChkSettingsGeneralUseStaticFFmpeg => "chkSettingsGeneralUseStaticFFmpeg", "Use static ffmpeg";
    OfdTitleFFmpeg => "ofdTitleFFmpeg", "Select ffmpeg.exe and ffprobe.exe";
    OfdFilterFFmpeg => "ofdFilterFFmpeg", "ffmpeg and ffprobe executable";
    BtnSettingsRedownloadYoutubeDl => "btnSettingsRedownloadYoutubeDl", "(re)download youtube-dl";
    BtnSettingsRedownloadFfmpeg => "btnSettingsRedownloadFfmpeg", "(re)download ffmpeg";
    ChkSettingsGeneralCheckForUpdatesOnLaunch => "chkSettingsGeneralCheckForUpdatesOnLaunch", "Check for updates on launch";
    ChkSettingsGeneralCheckForBetaUpdates => "chkSettingsGeneralCheckForBetaUpdates", "Check for beta updates";
    ChkSettingsGeneralDeleteUpdaterAfterUpdating => "chkSettingsGeneralDeleteUpdaterAfterUpdating", "Delete updater after updating";
    ChkDeleteOldVersionAfterUpdating => "chkDeleteOldVersionAfterUpdating", "Delete old version after updating";
    ChkSettingsGeneralHoverOverUrlToPasteClipboard => "chkSettingsGeneralHoverOverUrlToPasteClipboard", "Hover over URL to paste clipboard";
    ChkSettingsGeneralClearUrlOnDownload => "chkSettingsGeneralClearUrlOnDownload", "Clear URL on download";
    ChkSettingsGeneralClearClipboardOnDownload => "chkSettingsGeneralClearClipboardOnDownload", "Clear clipboard on download";
    ChkSettingsGeneralAutoUpdateYoutubeDl => "chkSettingsGeneralAutoUpdateYoutubeDl", "Auto update youtube-dl on launch";
    GbSettingsGeneralCustomArguments => "gbSettingsGeneralCustomArguments", "Custom arguments (saves on download)";
    RbSettingsGeneralCustomArgumentsDontSave => "rbSettingsGeneralCustomArgumentsDontSave", "Don't save";
    RbSettingsGeneralCustomArgumentsSaveAsArgsText => "rbSettingsGeneralCustomArgumentsSaveAsArgsText", "Save as ./args.txt";
    RbSettingsGeneralCustomArgumentsSaveInSettings => "rbSettingsGeneralCustomArgumentsSaveInSettings", "Save in settings";
    LbSettingsDownloadsDownloadPath => "lbSettingsDownloadsDownloadPath", "download path";
    LbSettingsDownloadsFileNameSchema => "lbSettingsDownloadsFileNameSchema", "file name schema";
    TabDownloadsGeneral => "tabDownloadsGeneral", "General";
    TabDownloadsSorting => "tabDownloadsSorting", "Sorting";
    TabDownloadsFixes => "tabDownloadsFixes", "Fixes";
    TabDownloadsConnection => "tabDownloadsConnection", "Connection";
    TabDownloadsUpdating => "tabDownloadsUpdating", "Updating";
    TabDownloadsBatch => "tabDownloadsBatch", "Batch";
    TabExtendedOptions => "tabExtendedOptions", "Extended downloader";
    ChkSettingsDownloadsSaveFormatQuality => "chkSettingsDownloadsSaveFormatQuality", "Save quality, format, && args on download";
    ChkSettingsDownloadsDownloadSubtitles => "chkSettingsDownloadsDownloadSubtitles", "Download subtitles";
    ChkSettingsDownloadsEmbedSubtitles => "chkSettingsDownloadsEmbedSubtitles", "Embed subtitles into file";
    ChkSettingsDownloadsSaveVideoInfo => "chkSettingsDownloadsSaveVideoInfo", "Save video info";
    ChkSettingsDownloadsWriteMetadataToFile => "chkSettingsDownloadsWriteMetadataToFile", "Write metadata to file";
    ChkSettingsDownloadsSaveDescription => "chkSettingsDownloadsSaveDescription", "Save description";
    ChkSettingsDownloadsKeepOriginalFiles => "chkSettingsDownloadsKeepOriginalFiles", "Keep original files";
    ChkSettingsDownloadsSaveAnnotations => "chkSettingsDownloadsSaveAnnotations", "Save annotations";
    ChkSettingsDownloadsSaveThumbnails => "chkSettingsDownloadsSaveThumbnails", "Save thumbnails";
    ChkSettingsDownloadsEmbedThumbnails => "chkSettingsDownloadsEmbedThumbnails", "Embed thumbnail into file";
    ChkSettingsDownloadsAutomaticallyDeleteYoutubeDlWhenClosing => "chkSettingsDownloadsAutomaticallyDeleteYoutubeDlWhenClosing", "Automatically delete youtube-dl when closing";
    ChkSettingsDownloadsSeparateDownloadsToDifferentFolders => "chkSettingsDownloadsSeparateDownloadsToDifferentFolders", "Separate downloads to different folders";
    ChkSettingsDownloadsSeparateIntoWebsiteUrl => "chkSettingsDownloadsSeparateIntoWebsiteUrl", "Separate into website url";
    ChkSettingsDownloadsWebsiteSubdomains => "chkSettingsDownloadsWebsiteSubdomains", "Use subdomains in folder names";
    ChkSettingsDownloadsFixVReddIt => "chkSettingsDownloadsFixVReddIt", "Fix v.redd.it";
    ChkSettingsDownloadsPreferFFmpeg => "chkSettingsDownloadsPreferFFmpeg", "Prefer ffmpeg for downloads";
    ChkSettingsDownloadsLimitDownload => "chkSettingsDownloadsLimitDownload", "Limit download";
    LbSettingsDownloadsRetryAttempts => "lbSettingsDownloadsRetryAttempts", "Retry attempts";
    ChkSettingsDownloadsForceIpv4 => "chkSettingsDownloadsForceIpv4", "Force IPv4";
    ChkSettingsDownloadsForceIpv6 => "chkSettingsDownloadsForceIpv6", "Force IPv6";
    ChkSettingsDownloadsUseProxy => "chkSettingsDownloadsUseProxy", "Use a proxy";
    ChkSettingsDownloadsUseYoutubeDlsUpdater => "chkSettingsDownloadsUseYoutubeDlsUpdater", "Use youtube-dl's internal updater";
    LbSettingsDownloadsUpdatingYtdlType => "lbSettingsDownloadsUpdatingYtdlType", "Youtube-DL fork";
    CbSettingsDownloadsUpdatingYtdlTypeHint => "cbSettingsDownloadsUpdatingYtdlTypeHint", "The youtube-dl repo that will be targetted";
    LlbSettingsDownloadsYtdlTypeViewRepo => "llbSettingsDownloadsYtdlTypeViewRepo", "View source repo";
    LlbSettingsDownloadsYtdlTypeViewRepoHint => "llbSettingsDownloadsYtdlTypeViewRepoHint", "Go to the repository page of the selected fork";
    ChkSettingsDownloadsSeparateBatchDownloads => "chkSettingsDownloadsSeparateBatchDownloads", "Separate Batch Downloads";
    ChkSettingsDownloadsAddDateToBatchDownloadFolders => "chkSettingsDownloadsAddDateToBatchDownloadFolders", "Include Date onto Download Folders";
    ChkExtendedPreferExtendedDialog => "chkExtendedPreferExtendedDialog", "Prefer extended downloader";
    ChkExtendedAutomaticallyDownloadThumbnail => "chkExtendedAutomaticallyDownloadThumbnail", "Automatically download thumbnails";
    ChkSettingsConverterClearOutputAfterConverting => "chkSettingsConverterClearOutputAfterConverting", "Clear output after converting";
    ChkSettingsConverterDetectOutputFileType => "chkSettingsConverterDetectOutputFileType", "Detect output filetype";
    ChkSettingsConverterClearInputAfterConverting => "chkSettingsConverterClearInputAfterConverting", "Clear input after converting";
    ChkSettingsConverterHideFFmpegCompileInfo => "chkSettingsConverterHideFFmpegCompileInfo", "Hide ffmpeg compile info";
    TcSettingsConverterVideo => "tcSettingsConverterVideo", "Video";
    TcSettingsConverterAudio => "tcSettingsConverterAudio", "Audio";
    TcSettingsConverterCustom => "tcSettingsConverterCustom", "Custom";
    LbSettingsConverterVideoBitrate => "lbSettingsConverterVideoBitrate", "Bitrate";
    LbSettingsConverterVideoPreset => "lbSettingsConverterVideoPreset", "Preset";
    LbSettingsConverterVideoProfile => "lbSettingsConverterVideoProfile", "Profile";
    LbSettingsConverterVideoCRF => "lbSettingsConverterVideoCRF", "CRF";
    ChkSettingsConverterVideoFastStart => "chkSettingsConverterVideoFastStart", "faststart";
    LbSettingsConverterAudioBitrate => "lbSettingsConverterAudioBitrate", "Bitrate";
    LbSettingsConverterCustomHeader => "lbSettingsConverterCustomHeader", "Don't pass input or output directories/fies,\nit's automatically handled by the program";
    LbSettingsExtensionsHeader => "lbSettingsExtensionsHeader", "This allows you to input your own extensions\nto be used with this application";
    LbSettingsExtensionsExtensionFullName => "lbSettingsExtensionsExtensionFullName", "Extension full name";
    TxtSettingsExtensionsExtensionFullName => "txtSettingsExtensionsExtensionFullName", "Example extension";
    LbSettingsExtensionsExtensionShort => "lbSettingsExtensionsExtensionShort", "Extension short";
    TxtSettingsExtensionsExtensionShort => "txtSettingsExtensionsExtensionShort", "ext";
    BtnSettingsExtensionsAdd => "btnSettingsExtensionsAdd", "Add";
    LbSettingsExtensionsFileName => "lbSettingsExtensionsFileName", "FileName";
    BtnSettingsExtensionsRemoveSelected => "btnSettingsExtensionsRemoveSelected", "Remove selected";
    ChkSettingsErrorsShowDetailedErrors => "chkSettingsErrorsShowDetailedErrors", "Show detailed errors";
    ChkSettingsErrorsSaveErrorsAsErrorLog => "chkSettingsErrorsSaveErrorsAsErrorLog", "Save errors as ./error.log";
    ChkSettingsErrorsSuppressErrors => "chkSettingsErrorsSuppressErrors", "Suppress errors";

    // frmSettings tooltips
    BtnSettingsCancelHint => "btnSettingsCancelHint", "Discard any changed settings";
    BtnSettingsSaveHint => "btnSettingsSaveHint", "Save all configured settings";
    LbSettingsGeneralYoutubeDlPathHint => "lbSettingsGeneralYoutubeDlPathHint", "Static youtube-dl directory\n\nStatic youtube-dl means youtube-dl will always be located in that one directory.";
    ChkSettingsGeneralUseStaticYoutubeDlHint => "chkSettingsGeneralUseStaticYoutubeDlHint", "Use a static placed youtube-dl.exe file";
    TxtSettingsGeneralYoutubeDlPathHint => "txtSettingsGeneralYoutubeDlPathHint", "The path of youtube-dl where it won't be moved";
    BtnSettingsGeneralBrowseYoutubeDlHint => "btnSettingsGeneralBrowseYoutubeDlHint", "Browse for a new folder where you'll store youtube-dl";
    LbSettingsGeneralFFmpegDirectoryHint => "lbSettingsGeneralFFmpegDirectoryHint", "Static ffmpeg directory\n\nStatic ffmpeg means ffmpeg will always be located in that one directory.";
    ChkSettingsGeneralUseStaticFFmpegHint => "chkSettingsGeneralUseStaticFFmpegHint", "Use a static placed ffmpeg.exe and ffprobe.exe files";
    TxtSettingsGeneralFFmpegPathHint => "txtSettingsGeneralFFmpegPathHint", "The path of ffmpeg where it won't be moved";
    BtnSettingsGeneralBrowseFFmpegHint => "btnSettingsGeneralBrowseFFmpegHint", "Browse for a new folder where you'll store ffmpeg";
    BtnSettingsRedownloadYoutubeDlHint => "btnSettingsRedownloadYoutubeDlHint", "Downloads or updates youtube-dl to the known path of youtube-dl if one is known; otherwise, the same directory as the program.\n\nIf the path to youtube-dl is not accessible or writeable by this program, the download will fail.";
    BtnSettingsRedownloadFfmpegHint => "btnSettingsRedownloadFfmpegHint", "Downloads the latest version of ffmpeg and extracts it to the path to ffmpeg if one is known; otherwise, the same directory as the program.\n\nIf the path to ffmpeg is not accessible or writeable by this program, the download will fail.";
    ChkSettingsGeneralCheckForUpdatesOnLaunchHint => "chkSettingsGeneralCheckForUpdatesOnLaunchHint", "Check for updates on launch of youtube-dl-gui";
    ChkSettingsGeneralCheckForBetaUpdatesHint => "chkSettingsGeneralCheckForBetaUpdatesHint", "Checks for beta updates instead of regular updates";
    ChkSettingsGeneralDeleteUpdaterAfterUpdatingHint => "chkSettingsGeneralDeleteUpdaterAfterUpdatingHint", "Deletes the youtube-dl-gui updater when it successfully updates.";
    ChkDeleteOldVersionAfterUpdatingHint => "chkDeleteOldVersionAfterUpdatingHint", "Deletes the old version of youtube-dl-gui when it successfully updates.";
    ChkSettingsGeneralHoverOverUrlToPasteClipboardHint => "chkSettingsGeneralHoverOverUrlToPasteClipboardHint", "Hover over the URL textbox to paste the URL from the clipboard";
    ChkSettingsGeneralClearUrlOnDownloadHint => "chkSettingsGeneralClearUrlOnDownloadHint", "Clears the URL from the textbox on video download";
    ChkSettingsGeneralClearClipboardOnDownloadHint => "chkSettingsGeneralClearClipboardOnDownloadHint", "Clears the clipboard on video download";
    ChkSettingsGeneralAutoUpdateYoutubeDlHint => "chkSettingsGeneralAutoUpdateYoutubeDlHint", "Auto updates youtube-dl (or fork) when launching youtube-dl-gui.";
    GbSettingsGeneralCustomArgumentsHint => "gbSettingsGeneralCustomArgumentsHint", "Controls how custom arguments for youtube-dl will be saved";
    RbSettingsGeneralCustomArgumentsDontSaveHint => "rbSettingsGeneralCustomArgumentsDontSaveHint", "Doesn't save any custom arguments";
    RbSettingsGeneralCustomArgumentsSaveAsArgsTextHint => "rbSettingsGeneralCustomArgumentsSaveAsArgsTextHint", "Saves custom arguments as args.txt in youtube-dl-gui's directory";
    RbSettingsGeneralCustomArgumentsSaveInSettingsHint => "rbSettingsGeneralCustomArgumentsSaveInSettingsHint", "Saves custom arguments in the application settings";
    LbSettingsDownloadsDownloadPathHint => "lbSettingsDownloadsDownloadPathHint", "The path of the folder where files will be downloaded to";
    ChkSettingsDownloadsDownloadPathUseRelativePathHint => "chkSettingsDownloadsDownloadPathUseRelativePathHint", "Save to the program's relative path\r\n\r\nIf checked, the program will check the save path and use the current directory as the base path.\r\nSaving anywhere outside of the current directory will not set the flag and will set it to wherever you selected.";
    TxtSettingsDownloadsSavePathHint => "txtSettingsDownloadsSavePathHint", "where your downloads will be saved to";
    BtnSettingsDownloadsBrowseSavePathHint => "btnSettingsDownloadsBrowseSavePathHint", "browse for a new save folder";
    LlSettingsDownloadsSchemaHelpHint => "llSettingsDownloadsSchemaHelpHint", "Click here to view supported arguments";
    LbSettingsDownloadsFileNameSchemaHint => "lbSettingsDownloadsFileNameSchemaHint", "The file name schema\n\nThis basically replaces sequences with video information for a custom file name.";
    TxtSettingsDownloadsFileNameSchemaHint => "txtSettingsDownloadsFileNameSchemaHint", "The file name schema that will be used by youtube-dl";
    ChkSettingsDownloadsSaveFormatQualityHint => "chkSettingsDownloadsSaveFormatQualityHint", "Saves the quality selection, format selection, and custom arguments on download on the main form";
    ChkSettingsDownloadsDownloadSubtitlesHint => "chkSettingsDownloadsDownloadSubtitlesHint", "Download all available subtitles for the video\nIf no subtitles are available, nothing will download";
    ChkSettingsDownloadsEmbedSubtitlesHint => "chkSettingsDownloadsEmbedSubtitlesHint", "Embeds downloaded subtitles into the output file\nOnly works for mp4, webm, and mkv videos";
    ChkSettingsDownloadsSaveVideoInfoHint => "chkSettingsDownloadsSaveVideoInfoHint", "Saves the video's info into a .info.json file";
    ChkSettingsDownloadsWriteMetadataToFileHint => "chkSettingsDownloadsWriteMetadataToFileHint", "Writes the video's metadata to the output file";
    ChkSettingsDownloadsSaveDescriptionHint => "chkSettingsDownloadsSaveDescriptionHint", "Saves the video's description to a .description file";
    ChkSettingsDownloadsKeepOriginalFilesHint => "chkSettingsDownloadsKeepOriginalFilesHint", "Keeps the original files of the download\nBy default, youtube-dl will delete them after merging";
    ChkSettingsDownloadsSaveAnnotationsHint => "chkSettingsDownloadsSaveAnnotationsHint", "Saves the video's annotations to a .annotations.xml file";
    ChkSettingsDownloadsSaveThumbnailsHint => "chkSettingsDownloadsSaveThumbnailsHint", "Saves the video's thumbnail";
    ChkSettingsDownloadsEmbedThumbnailsHint => "chkSettingsDownloadsEmbedThumbnailsHint", "Embeds downloaded thumbnails into the output file as cover art\nRequires AtomicParsley (https://github.com/wez/atomicparsley), or youtube-dl will result in an error";
    ChkSettingsDownloadsAutomaticallyDeleteYoutubeDlWhenClosingHint => "chkSettingsDownloadsAutomaticallyDeleteYoutubeDlWhenClosingHint", "Automatically delete youtube-dl.exe when closing youtube-dl-gui";
    ChkSettingsDownloadsSeparateDownloadsToDifferentFoldersHint => "chkSettingsDownloadsSeparateDownloadsToDifferentFoldersHint", "Separates downloads into their own folder based on the download type\n\nVideos would be <download directory>\\Video\nAudio would be <download directory>\\Audio\nCustom would be <download directory>\\Custom";
    ChkSettingsDownloadsSeparateIntoWebsiteUrlHint => "chkSettingsDownloadsSeparateIntoWebsiteUrlHint", "Downloaded files will be saved to the download path with the URL of the website appended at the end\nEx: C:\\Users\\YourName\\Videos\\youtube.com\\Video.mp4";
    ChkSettingsDownloadsWebsiteSubdomainsHint => "chkSettingsDownloadsWebsiteSubdomainsHint", "Any downloads on a website using a subdomain will be separated into its own folder.\nEx: C:\\Users\\YourName\\Videos\\mobile.youtube.com\\Video.mp4 (mobile would be the subdomain of youtube.com)";
    ChkSettingsDownloadsFixVReddItHint => "chkSettingsDownloadsFixVReddItHint", "Fixes visual corruptions on v.redd.it/reddit.com links using ffmpeg's HTTP Live Streaming (HLS)\n\nRecommended to stay on.\nThis requires FFMPEG to be installed and available, it will fallback to youtube-dl's default.";
    ChkSettingsDownloadsPreferFFmpegHint => "chkSettingsDownloadsPreferFFmpegHint", "Prefer's ffmpeg's hls over youtube-dl's own. This may fix some sites, and break others.";
    ChkSettingsDownloadsLimitDownloadHint => "chkSettingsDownloadsLimitDownloadHint", "Limits the downloads to the specified speed";
    NumSettingsDownloadsLimitDownloadHint => "numSettingsDownloadsLimitDownloadHint", "The speed that the download will be throttled to\nSet the number to 0 to disable limiting";
    CbSettingsDownloadsLimitDownloadHint => "cbSettingsDownloadsLimitDownloadHint", "The *byte size limit";
    LbSettingsDownloadsRetryAttemptsHint => "lbSettingsDownloadsRetryAttemptsHint", "Retry downloading the specified amount of times if it fails";
    NumSettingsDownloadsRetryAttemptsHint => "numSettingsDownloadsRetryAttemptsHint", "The maximum amount of retries allowed";
    ChkSettingsDownloadsForceIpv4Hint => "chkSettingsDownloadsForceIpv4Hint", "Force the connection to tunnel through IPv4";
    ChkSettingsDownloadsForceIpv6Hint => "chkSettingsDownloadsForceIpv6Hint", "Force the connection to tunnel through IPv6";
    ChkSettingsDownloadsUseProxyHint => "chkSettingsDownloadsUseProxyHint", "Download using a proxy";
    CbSettingsDownloadsProxyTypeHint => "cbSettingsDownloadsProxyTypeHint", "The proxy protocol that will be used";
    TxtSettingsDownloadsProxyIpHint => "txtSettingsDownloadsProxyIpHint", "The proxy IP that will be used";
    TxtSettingsDownloadsProxyPortHint => "txtSettingsDownloadsProxyPortHint", "The proxy port that will be used";
    ChksettingsDownloadsUseYoutubeDlsUpdaterHint => "chksettingsDownloadsUseYoutubeDlsUpdaterHint", "Use youtube-dl's internal updater instead of this application's updater";
    ChkSettingsDownloadsSeparateBatchDownloadsHint => "chkSettingsDownloadsSeparateBatchDownloadsHint", "Batch downloads are separated into a new folder in the designated download path";
    ChkSettingsDownloadsAddDateToBatchDownloadFoldersHint => "chkSettingsDownloadsAddDateToBatchDownloadFoldersHint", "Batch downloads are further separated into a new folder that is the date and time the batch started";
    ChkExtendedPreferExtendedDialogHint => "chkExtendedPreferExtendedDialogHint", "Uses the extended downloader instead of the quick downloader when clicking \"Download\" on the main form.";
    ChkExtendedAutomaticallyDownloadThumbnailHint => "chkExtendedAutomaticallyDownloadThumbnailHint", "Automatically downloads the videos thumbnail to display in the form, when available.";
    ChkSettingsConverterClearOutputAfterConvertingHint => "chkSettingsConverterClearOutputAfterConvertingHint", "Clears the output file after a successful conversion";
    ChkSettingsConverterDetectOutputFileTypeHint => "chkSettingsConverterDetectOutputFileTypeHint", "If Automatic is checked on converting, this will attempt to detect the output file type.\n\nDisable this if you want a simple conversion. The quality may suffer as a result.";
    ChkSettingsConverterClearInputAfterConvertingHint => "chkSettingsConverterClearInputAfterConvertingHint", "Clears the input file after a successful conversion";
    ChkSettingsConverterHideFFmpegCompileInfoHint => "chkSettingsConverterHideFFmpegCompileInfoHint", "Enabling this will hide some compilation information of ffmpeg.";
    LbSettingsConverterVideoBitrateHint => "lbSettingsConverterVideoBitrateHint", "The bitrate of the video\nA bitrate is how many bits per second are streamed to the player\n\nhigher = better, at the cost of file size\n\nIf you were to input \"10,000\" as the bitrate, it would be interpreted as \"10,000,000\" bits per second.";
    LbSettingsConverterVideoPresetHint => "lbSettingsConverterVideoPresetHint", "The video preset of the conversion\n\nultrafast = fastest, but lower quality\nveryslow = slowest, but higher quality";
    LbSettingsConverterVideoProfileHint => "lbSettingsConverterVideoProfileHint", "The encoder profile to be used during conversion. It affects the compression of the video.\nIt's generally a good idea to stick with the main profile";
    LbSettingsConverterVideoCRFHint => "lbSettingsConverterVideoCRFHint", "CRF is constant rate factor.\n\nLower = Higher quality";
    ChkSettingsConverterVideoFastStartHint => "chkSettingsConverterVideoFastStartHint", "Faststart moves the metadata to the front of the file.\n\nEnabling this allows videos to be played before they are fully downloaded.";
    LbSettingsConverterAudioBitrateHint => "lbSettingsConverterAudioBitrateHint", "The bitrate of the audio\nA bitrate is how many bits are streamed to the player\n\nHigher = better, at the cost of size\n\nIf you were to put \"256\", it would be interpreted as \"256,000\" bits per second.";
    TxtSettingsConverterCustomArgumentsHint => "txtSettingsConverterCustomArgumentsHint", "Custom arguments that will be passed through ffmpeg instead of built-in arguments";
    ChkSettingsErrorsShowDetailedErrorsHint => "chkSettingsErrorsShowDetailedErrorsHint", "Shows more details in errors";
    ChkSettingsErrorsSaveErrorsAsErrorLogHint => "chkSettingsErrorsSaveErrorsAsErrorLogHint", "Saves the latest error as error.log in the exeucting directory of youtube-dl-gui";
    ChkSettingsErrorsSuppressErrorsHint => "chkSettingsErrorsSuppressErrorsHint", "This will silence any errors and will not save any error.log files.\n\nThis basically overrides all error settings. Use at your own risk.";

    // frmSubtitles
    FrmSubtitles => "frmSubtitles", "Download subtitles";
    LbSubtitlesHeader => "lbSubtitlesHeader", "This only downloads subtitles";
    LbSubtitlesUrl => "lbSubtitlesUrl", "URL";
    LbSubtitlesLanguages => "lbSubtitlesLanguages", "Language(s)";
    BtnSubtitlesAddLanguage => "btnSubtitlesAddLanguage", "Add";
    BtnSubtitlesClearLanguages => "btnSubtitlesClearLanguages", "Clear";
    BtnSubtitlesDownload => "btnSubtitlesDownload", "Download subtitles";

    // frmTools
    FrmTools => "frmTools", "Misc tools";
    BtnMiscToolsRemoveAudio => "btnMiscToolsRemoveAudio", "Remove audio...";
    BtnMiscToolsExtractAudio => "btnMiscToolsExtractAudio", "Extract audio...";
    BtnMiscToolsVideoToGif => "btnMiscToolsVideoToGif", "Video to gif...";

    // frmUpdateAvailable
    FrmUpdateAvailable => "frmUpdateAvailable", "Update available";
    LbUpdateAvailableHeader => "lbUpdateAvailableHeader", "An update is available";
    LbUpdateAvailableUpdateVersion => "lbUpdateAvailableUpdateVersion", "Update version: {0}";
    LbUpdateAvailableCurrentVersion => "lbUpdateAvailableCurrentVersion", "Current version: {0}";
    LbUpdateAvailableChangelog => "lbUpdateAvailableChangelog", "Changelog:";
    LbUpdateSize => "lbUpdateSize", "The new executable size is {0}";
    BtnUpdateAvailableSkipVersion => "btnUpdateAvailableSkipVersion", "Skip version";
    BtnUpdateAvailableUpdate => "btnUpdateAvailableUpdate", "Update";
}
